use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::profile::{CompletionRecord, ReflectionRecord};
use crate::streak::StreakUpdate;

/// Every state change in a session produces an Event.
/// Hosts render them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ProfileCreated {
        name: String,
        start_date: NaiveDate,
        streak: StreakUpdate,
    },
    StreakUpdated {
        update: StreakUpdate,
        at: NaiveDate,
    },
    ChallengeStarted {
        challenge_id: u32,
        title: String,
        at: NaiveDate,
    },
    ReflectionSaved {
        text: String,
        at: NaiveDateTime,
    },
    ProfileImported {
        name: String,
        completions: usize,
        reflections: usize,
    },
    SessionReset,
}

impl Event {
    pub fn challenge_started(record: &CompletionRecord) -> Self {
        Event::ChallengeStarted {
            challenge_id: record.challenge_id,
            title: record.title.clone(),
            at: record.completed_date,
        }
    }

    pub fn reflection_saved(record: &ReflectionRecord) -> Self {
        Event::ReflectionSaved {
            text: record.text.clone(),
            at: record.timestamp,
        }
    }
}
