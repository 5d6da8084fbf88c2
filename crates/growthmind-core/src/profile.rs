//! User profile and the records it accumulates.
//!
//! A single [`UserProfile`] holds everything a session knows about the user.
//! The host creates it on first interaction and is responsible for keeping
//! it between calls; core operations only borrow it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Difficulty tier of a challenge, grouped by commitment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }

    /// Label used in menus ("Beginner", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Tier::Beginner),
            "intermediate" => Ok(Tier::Intermediate),
            "advanced" => Ok(Tier::Advanced),
            other => Err(ValidationError::InvalidValue {
                field: "tier".to_string(),
                message: format!("'{other}' is not one of beginner, intermediate, advanced"),
            }),
        }
    }
}

/// Log entry marking a challenge as started on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub challenge_id: u32,
    /// Title copied from the catalog at completion time.
    pub title: String,
    pub completed_date: NaiveDate,
    /// Reserved for linking a reflection to the challenge; unset by current flows.
    pub reflection: Option<String>,
}

/// Free-text journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionRecord {
    /// Minute precision.
    pub timestamp: NaiveDateTime,
    pub text: String,
}

/// Everything known about the user within one session.
///
/// `completed_challenges` and `reflection_entries` are append-only; the
/// journal module is the only writer. `longest_streak >= current_streak`
/// holds after every streak update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub start_date: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_login: Option<NaiveDate>,
    pub completed_challenges: Vec<CompletionRecord>,
    pub reflection_entries: Vec<ReflectionRecord>,
}

impl UserProfile {
    /// Fresh profile with no name, starting on `start_date`.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start_date,
            current_streak: 0,
            longest_streak: 0,
            last_login: None,
            completed_challenges: Vec::new(),
            reflection_entries: Vec::new(),
        }
    }

    /// Whether the user has set a name yet.
    pub fn is_onboarded(&self) -> bool {
        !self.name.is_empty()
    }

    /// Check the invariants a profile must satisfy regardless of how it was built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.longest_streak < self.current_streak {
            return Err(ValidationError::StreakInvariant {
                current: self.current_streak,
                longest: self.longest_streak,
            });
        }
        Ok(())
    }
}
