use growthmind_core::storage::Database;
use growthmind_core::{update_streak, Event};

use super::{load_onboarded, print_json, Clock, CmdResult};

pub fn run(clock: &Clock) -> CmdResult {
    let db = Database::open()?;
    let mut profile = load_onboarded(&db)?;

    let update = update_streak(&mut profile, clock.today);
    if update.outcome.changed() {
        db.save_profile(&profile)?;
    }

    print_json(&Event::StreakUpdated {
        update,
        at: clock.today,
    })
}
