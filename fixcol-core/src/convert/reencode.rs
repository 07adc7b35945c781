use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::codec::{EncodingId, decoder_for};
use crate::error::Result;

pub const TEMP_FILE_NAME: &str = "input.txt";

/// Scratch directory owned by one conversion. Dropping it removes the directory.
pub struct Scratch {
    configured: Option<PathBuf>,
    owned: Option<TempDir>,
}

impl Scratch {
    pub fn new(configured: Option<PathBuf>) -> Self {
        Self {
            configured,
            owned: None,
        }
    }

    /// Create the directory on first use and return its path.
    pub fn prepare(&mut self) -> std::io::Result<PathBuf> {
        if let Some(dir) = &self.configured {
            fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }
        let t = match self.owned.take() {
            Some(t) => t,
            None => tempfile::Builder::new().prefix("fixcol-").tempdir()?,
        };
        let path = t.path().to_path_buf();
        self.owned = Some(t);
        Ok(path)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        if let Some(dir) = &self.configured {
            if dir.exists() {
                if let Err(e) = fs::remove_dir_all(dir) {
                    tracing::warn!(dir = %dir.display(), error = %e, "could not remove scratch directory");
                }
            }
        }
        // `owned` removes itself.
    }
}

/// Decode `source` with `encoding` and write it as UTF-8 (no BOM) into the scratch directory.
pub fn write_utf8_copy(source: &Path, encoding: EncodingId, scratch: &mut Scratch) -> Result<PathBuf> {
    let text = {
        let mut f = File::open(source)?;
        decoder_for(encoding).decode(&mut f)?
    };

    let dir = scratch.prepare()?;
    let path = dir.join(TEMP_FILE_NAME);
    let mut w = BufWriter::new(File::create(&path)?);
    w.write_all(text.as_bytes())?;
    w.flush()?;
    Ok(path)
}
