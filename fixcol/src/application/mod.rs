pub mod handlers;

use std::path::PathBuf;

use crate::presentation::cli::{Cli, Commands, FieldCommands, LayoutCommands};
use fixcol_core::error::Result;
use fixcol_core::repo::{LayoutRepo, StoreParams};
use fixcol_core::repo_factory::{Backend, open_store};

/// Paths every command runs against. Nothing is hard-coded in the core.
pub struct Settings {
    pub settings_dir: PathBuf,
    pub scratch_dir: Option<PathBuf>,
}

impl Settings {
    pub fn repo(&self) -> Box<dyn LayoutRepo> {
        open_store(
            Backend::Fs,
            StoreParams {
                settings_dir: self.settings_dir.clone(),
            },
        )
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings {
        settings_dir: cli.settings,
        scratch_dir: cli.scratch,
    };
    match cli.command {
        Commands::Convert {
            source,
            dest,
            layout,
            encoding,
            crlf,
        } => handlers::handle_convert(&settings, source, dest, layout, encoding, crlf),
        Commands::Layout(cmd) => match cmd {
            LayoutCommands::List => handlers::handle_layout_list(&settings),
            LayoutCommands::Show { label } => handlers::handle_layout_show(&settings, label),
            LayoutCommands::Add { label } => handlers::handle_layout_add(&settings, label),
            LayoutCommands::Rm { label } => handlers::handle_layout_rm(&settings, label),
            LayoutCommands::Rename { from, to } => {
                handlers::handle_layout_rename(&settings, from, to)
            }
        },
        Commands::Field(cmd) => match cmd {
            FieldCommands::Insert {
                label,
                position,
                name,
                width,
            } => handlers::handle_field_insert(&settings, label, position, name, width),
            FieldCommands::Rm { label, positions } => {
                handlers::handle_field_rm(&settings, label, positions)
            }
            FieldCommands::Set {
                label,
                position,
                name,
                width,
            } => handlers::handle_field_set(&settings, label, position, name, width),
        },
    }
}
