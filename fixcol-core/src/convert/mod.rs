//! Fixed-width text to CSV.
//!
//! A conversion runs in two passes. The source is decoded with the selected
//! encoding and written to a scratch file as UTF-8, then the scratch file is read
//! line by line and each line is cut into the layout's field widths.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::EncodingId;
use crate::domain::FieldDefinition;
use crate::error::{FixcolError, Result};

pub mod csv;
pub mod reencode;

use reencode::Scratch;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    /// Where the intermediate UTF-8 copy lives. Removed after every call.
    /// When unset a fresh temporary directory is used.
    pub scratch_dir: Option<PathBuf>,
    pub line_ending: LineEnding,
}

#[derive(Clone, Debug)]
pub struct ConvertRequest {
    pub source: PathBuf,
    pub destination_dir: PathBuf,
    pub encoding: EncodingId,
    pub fields: Vec<FieldDefinition>,
}

/// `<destination_dir>/<source stem>.csv`
pub fn destination_path(source: &Path, destination_dir: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".csv");
    destination_dir.join(name)
}

/// Convert `req.source` into a CSV file inside `req.destination_dir` and return its path.
///
/// Failures are checked in a fixed order: missing source, missing destination,
/// scratch file, CSV pass. A CSV pass that fails leaves no output file behind.
/// The scratch directory is gone when this returns, whatever the result.
pub fn convert(req: &ConvertRequest, opts: Option<&ConvertOptions>) -> Result<PathBuf> {
    let opts = opts.cloned().unwrap_or_default();
    let mut scratch = Scratch::new(opts.scratch_dir.clone());

    if !req.source.is_file() {
        return Err(FixcolError::SourceMissing(req.source.clone()));
    }
    if !req.destination_dir.is_dir() {
        return Err(FixcolError::DestinationMissing(req.destination_dir.clone()));
    }

    let temp = reencode::write_utf8_copy(&req.source, req.encoding, &mut scratch)
        .map_err(|e| match e {
            FixcolError::Io(io) => FixcolError::TempFile(io),
            other => other,
        })?;
    debug!(temp = %temp.display(), encoding = req.encoding.selector(), "re-encoded source");

    let dst = destination_path(&req.source, &req.destination_dir);
    if dst.exists() {
        debug!(path = %dst.display(), "removing previous output");
        fs::remove_file(&dst)?;
    }

    match csv::write_csv(&temp, &dst, &req.fields, opts.line_ending) {
        Ok(rows) => {
            info!(path = %dst.display(), rows, "wrote CSV");
            Ok(dst)
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(&dst) {
                if rm.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %dst.display(), error = %rm, "could not remove partial CSV");
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_uses_source_stem() {
        let p = destination_path(Path::new("/in/data.txt"), Path::new("/out"));
        assert_eq!(p, PathBuf::from("/out/data.csv"));
        let p = destination_path(Path::new("/in/archive.tar.gz"), Path::new("/out"));
        assert_eq!(p, PathBuf::from("/out/archive.tar.csv"));
        let p = destination_path(Path::new("/in/plain"), Path::new("/out"));
        assert_eq!(p, PathBuf::from("/out/plain.csv"));
    }

    #[test]
    fn line_endings() {
        assert_eq!(LineEnding::default().as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
