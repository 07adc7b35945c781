use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::container::record::LayoutRecord;
use crate::domain::LayoutDefinition;
use crate::error::{FixcolError, Result};
use crate::util::sanitize::file_stem;

pub const LAYOUT_EXT: &str = "json";

/// Path of the file that holds `label` inside `dir`.
pub fn layout_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{}.{LAYOUT_EXT}", file_stem(label)))
}

/// Replace the contents of `dir` with one file per layout.
///
/// The directory is deleted and recreated first, so layouts not passed in are gone
/// afterwards. A failed write stops the save; files already written stay on disk.
/// Labels are not checked here: two layouts with the same label overwrite each other.
pub fn save(dir: &Path, layouts: &[LayoutDefinition]) -> Result<()> {
    if dir.exists() {
        debug!(dir = %dir.display(), "clearing settings directory");
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;

    for layout in layouts {
        let path = layout_path(dir, &layout.label);
        let json = serde_json::to_string_pretty(&LayoutRecord::from(layout))?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), fields = layout.fields.len(), "wrote layout");
    }

    info!(dir = %dir.display(), count = layouts.len(), "saved layouts");
    Ok(())
}

/// Read every layout file directly inside `dir`.
///
/// A directory without any files is an error; sub-directories are ignored. Files
/// that are not readable layouts are skipped with a warning; the rest come back in
/// directory enumeration order.
pub fn load(dir: &Path) -> Result<Vec<LayoutDefinition>> {
    let mut entries = Vec::new();
    for e in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let e = e.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("settings directory walk failed"))
        })?;
        if e.file_type().is_file() {
            entries.push(e);
        } else {
            debug!(path = %e.path().display(), "skipping non-file entry");
        }
    }
    // A root that is a plain file yields no entries at depth 1.
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("settings directory not found: {}", dir.display()),
        )
        .into());
    }
    if entries.is_empty() {
        return Err(FixcolError::EmptySettings(dir.to_path_buf()));
    }

    let mut layouts = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        match read_layout(path) {
            Ok(layout) => layouts.push(layout),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable layout file"),
        }
    }

    info!(dir = %dir.display(), count = layouts.len(), "loaded layouts");
    Ok(layouts)
}

fn read_layout(path: &Path) -> Result<LayoutDefinition> {
    let text = fs::read_to_string(path)?;
    let record: Option<LayoutRecord> = serde_json::from_str(&text)?;
    record
        .map(LayoutDefinition::from)
        .ok_or_else(|| FixcolError::Format("layout file holds null".into()))
}
