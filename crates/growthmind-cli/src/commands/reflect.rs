use clap::Subcommand;
use growthmind_core::journal::reflections_newest_first;
use growthmind_core::storage::Database;
use growthmind_core::{save_reflection, Event};

use super::{load_or_new, print_json, Clock, CmdResult};

#[derive(Subcommand)]
pub enum ReflectAction {
    /// Save a reflection (empty text is allowed)
    Add {
        /// Reflection text
        #[arg(default_value = "")]
        text: String,
    },
    /// List reflections, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReflectAction, clock: &Clock) -> CmdResult {
    let db = Database::open()?;
    let mut profile = load_or_new(&db, clock)?;

    match action {
        ReflectAction::Add { text } => {
            let event = Event::reflection_saved(save_reflection(&mut profile, &text, clock.now));
            db.save_profile(&profile)?;
            print_json(&event)
        }
        ReflectAction::List { json } => {
            let entries: Vec<_> = reflections_newest_first(&profile).collect();
            if json {
                return print_json(&entries);
            }
            if entries.is_empty() {
                println!("Your reflection journal is empty.");
            }
            for entry in entries {
                println!("Entry from {}", entry.timestamp.format("%Y-%m-%d %H:%M"));
                println!("  {}", entry.text);
            }
            Ok(())
        }
    }
}
