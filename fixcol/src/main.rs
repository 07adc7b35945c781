mod application;
mod logging;
mod presentation;

use std::process::ExitCode;

use clap::Parser;
use fixcol_core::Outcome;

use crate::presentation::cli::Cli;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let res = application::run(cli);
    let outcome = Outcome::of(&res);
    if let Err(e) = &res {
        eprintln!("error: {}: {e}", presentation::describe(outcome));
    }
    ExitCode::from(outcome.exit_code())
}
