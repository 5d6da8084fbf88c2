//! Export and import of the growth journal.

use clap::Args;
use growthmind_core::export::export_compact;
use growthmind_core::storage::Database;
use growthmind_core::{export, import, Config, Event, ValidationError};
use std::path::PathBuf;

use super::{print_json, CmdResult};

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Write to the configured export file name in the current directory
    #[arg(long, conflicts_with = "output")]
    file: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Exported journal to restore
    path: PathBuf,
    /// Replace an existing onboarded session
    #[arg(long)]
    force: bool,
}

pub fn run_export(args: ExportArgs) -> CmdResult {
    let db = Database::open()?;
    let config = Config::load()?;
    let profile = db
        .load_profile()?
        .ok_or(ValidationError::NotOnboarded)?;

    let document = if config.export.pretty {
        export(&profile)?
    } else {
        export_compact(&profile)?
    };

    let target = match (args.output, args.file) {
        (Some(path), _) => Some(path),
        (None, true) => Some(PathBuf::from(&config.export.file_name)),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            std::fs::write(&path, document)?;
            eprintln!("exported to {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}

pub fn run_import(args: ImportArgs) -> CmdResult {
    let db = Database::open()?;
    if !args.force {
        if let Some(existing) = db.load_profile()? {
            if existing.is_onboarded() {
                return Err(ValidationError::AlreadyOnboarded {
                    name: existing.name,
                }
                .into());
            }
        }
    }

    let document = std::fs::read_to_string(&args.path)?;
    let profile = import(&document)?;
    db.save_profile(&profile)?;

    print_json(&Event::ProfileImported {
        name: profile.name.clone(),
        completions: profile.completed_challenges.len(),
        reflections: profile.reflection_entries.len(),
    })
}
