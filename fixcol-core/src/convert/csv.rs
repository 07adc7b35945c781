use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::LineEnding;
use crate::domain::{FieldDefinition, has_header, total_width};
use crate::error::{FixcolError, Result};

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Cut `line` left to right into the fields' widths and join the pieces with commas.
/// Widths count `char`s. Nothing is quoted or escaped.
pub fn format_line(line: &str, fields: &[FieldDefinition]) -> String {
    let mut out = String::with_capacity(line.len() + fields.len());
    let mut rest = line;
    for (i, f) in fields.iter().enumerate() {
        let cut = rest
            .char_indices()
            .nth(f.width)
            .map(|(b, _)| b)
            .unwrap_or(rest.len());
        if i > 0 {
            out.push(',');
        }
        out.push_str(&rest[..cut]);
        rest = &rest[cut..];
    }
    out
}

pub fn header_line(fields: &[FieldDefinition]) -> String {
    fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Write `dst` from the UTF-8 file at `src`. Returns the number of data rows.
///
/// Empty lines are skipped. A line shorter than the layout's total width aborts the pass.
pub fn write_csv(
    src: &Path,
    dst: &Path,
    fields: &[FieldDefinition],
    ending: LineEnding,
) -> Result<usize> {
    let expected = total_width(fields)
        .ok_or_else(|| FixcolError::Format("total field width overflows".into()))?;
    let nl = ending.as_str();
    let mut w = BufWriter::new(File::create(dst).map_err(FixcolError::CsvWrite)?);
    w.write_all(&UTF8_BOM).map_err(FixcolError::CsvWrite)?;

    if has_header(fields) {
        write!(w, "{}{nl}", header_line(fields)).map_err(FixcolError::CsvWrite)?;
    }

    let reader = BufReader::new(File::open(src).map_err(FixcolError::CsvWrite)?);
    let mut rows = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(FixcolError::CsvWrite)?;
        if line.is_empty() {
            continue;
        }
        if fields.is_empty() {
            return Err(FixcolError::Format("layout has no fields".into()));
        }
        let len = line.chars().count();
        if len < expected {
            return Err(FixcolError::ShortLine {
                line: idx + 1,
                len,
                expected,
            });
        }
        write!(w, "{}{nl}", format_line(&line, fields)).map_err(FixcolError::CsvWrite)?;
        rows += 1;
    }

    w.flush().map_err(FixcolError::CsvWrite)?;
    Ok(rows)
}
