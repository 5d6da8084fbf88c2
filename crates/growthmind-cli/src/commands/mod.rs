pub mod challenge;
pub mod checkin;
pub mod config;
pub mod export;
pub mod profile;
pub mod progress;
pub mod quote;
pub mod reflect;
pub mod session;
pub mod status;

use chrono::{Local, NaiveDate, NaiveDateTime};
use growthmind_core::storage::Database;
use growthmind_core::{UserProfile, ValidationError};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// The one clock reading a command works with.
///
/// `--today` pins the date; the time of day still comes from the local clock.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub today: NaiveDate,
    pub now: NaiveDateTime,
}

impl Clock {
    pub fn read(today_override: Option<NaiveDate>) -> Self {
        let local = Local::now().naive_local();
        match today_override {
            Some(today) => Self {
                today,
                now: today.and_time(local.time()),
            },
            None => Self {
                today: local.date(),
                now: local,
            },
        }
    }
}

/// Stored profile, or a fresh one starting today if no session exists yet.
fn load_or_new(db: &Database, clock: &Clock) -> Result<UserProfile, Box<dyn std::error::Error>> {
    Ok(db
        .load_profile()?
        .unwrap_or_else(|| UserProfile::new(clock.today)))
}

/// Stored profile, which must have been onboarded.
fn load_onboarded(db: &Database) -> Result<UserProfile, Box<dyn std::error::Error>> {
    match db.load_profile()? {
        Some(profile) if profile.is_onboarded() => Ok(profile),
        _ => Err(ValidationError::NotOnboarded.into()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
