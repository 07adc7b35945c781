pub mod cli;

use fixcol_core::Outcome;

/// What the user should look at for each result kind.
pub fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ok => "done",
        Outcome::Error => "failed",
        Outcome::SourceMissing => "source file not found; check the source path",
        Outcome::DestinationMissing => "output folder not found; check the destination path",
        Outcome::TempFileError => "could not re-encode the source; check the encoding and scratch folder",
        Outcome::CsvWriteError => "could not write the CSV; check the layout widths against the data",
    }
}
