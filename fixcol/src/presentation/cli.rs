use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "fixcol: fixed-width records to CSV", long_about = None)]
pub struct Cli {
    /// Directory holding one JSON file per layout
    #[arg(long, global = true, default_value = "settings")]
    pub settings: PathBuf,

    /// Scratch directory for the re-encoded copy; removed after every conversion
    #[arg(long, global = true)]
    pub scratch: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum LayoutCommands {
    /// List saved layouts
    List,
    /// Print the fields of one layout
    Show { label: String },
    /// Add a layout with one blank field
    Add { label: String },
    /// Remove a layout
    Rm { label: String },
    /// Change a layout's label
    Rename { from: String, to: String },
}

#[derive(Subcommand)]
pub enum FieldCommands {
    /// Insert a field so that it takes `position` (1-based); later fields shift down
    Insert {
        label: String,
        position: u32,
        #[arg(long, default_value = "")]
        name: String,
        /// character count; anything but a non-negative integer means 0
        #[arg(long, allow_hyphen_values = true)]
        width: Option<String>,
    },
    /// Remove fields by position
    Rm {
        label: String,
        #[arg(required = true)]
        positions: Vec<u32>,
    },
    /// Edit a field's name and/or width
    Set {
        label: String,
        position: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        width: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a fixed-width text file to CSV using a saved layout
    Convert {
        source: PathBuf,
        /// existing directory that receives `<source stem>.csv`
        dest: PathBuf,
        #[arg(long)]
        layout: String,
        /// "shift-jis" or "utf-8"; anything else is read as UTF-8
        #[arg(long, default_value = "shift-jis")]
        encoding: String,
        /// end output rows with CRLF instead of LF
        #[arg(long)]
        crlf: bool,
    },

    #[command(subcommand)]
    /// Manage layouts
    Layout(LayoutCommands),

    #[command(subcommand)]
    /// Edit the fields of a layout
    Field(FieldCommands),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_defaults() {
        let cli = Cli::try_parse_from(["fixcol", "convert", "in.txt", "out", "--layout", "main"])
            .unwrap();
        assert_eq!(cli.settings, PathBuf::from("settings"));
        assert!(cli.scratch.is_none());
        match cli.command {
            Commands::Convert {
                encoding, crlf, ..
            } => {
                assert_eq!(encoding, "shift-jis");
                assert!(!crlf);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn global_paths_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fixcol", "layout", "list", "--settings", "cfg", "--scratch", "tmp",
        ])
        .unwrap();
        assert_eq!(cli.settings, PathBuf::from("cfg"));
        assert_eq!(cli.scratch, Some(PathBuf::from("tmp")));
    }

    #[test]
    fn negative_width_is_accepted_as_text() {
        let cli = Cli::try_parse_from(["fixcol", "field", "set", "main", "1", "--width", "-4"])
            .unwrap();
        match cli.command {
            Commands::Field(FieldCommands::Set { width, .. }) => {
                assert_eq!(width.as_deref(), Some("-4"))
            }
            _ => panic!("expected field set"),
        }
    }

    #[test]
    fn convert_requires_layout() {
        assert!(Cli::try_parse_from(["fixcol", "convert", "in.txt", "out"]).is_err());
    }

    #[test]
    fn field_rm_requires_positions() {
        assert!(Cli::try_parse_from(["fixcol", "field", "rm", "main"]).is_err());
    }
}
