use clap::Subcommand;
use growthmind_core::storage::Database;
use growthmind_core::Event;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// End the session, discarding the stored profile
    Reset,
}

pub fn run(action: SessionAction) -> CmdResult {
    let db = Database::open()?;
    match action {
        SessionAction::Reset => {
            if !db.clear_profile()? {
                tracing::info!("no session to reset");
            }
            print_json(&Event::SessionReset)
        }
    }
}
