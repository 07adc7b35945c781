//! Logging setup for the `fixcol` binary.
//!
//! Filter directives come from `FIXCOL_LOG` (for example `FIXCOL_LOG=debug` or
//! `FIXCOL_LOG=fixcol_core=debug,warn`). Without it only warnings are shown.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "FIXCOL_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: tests may have installed a subscriber already.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn filter_directives_parse() {
        for d in ["warn", "debug", "fixcol_core=debug,warn"] {
            assert!(EnvFilter::try_new(d).is_ok(), "bad directive: {d}");
        }
    }
}
