//! Append-only journal operations on a [`UserProfile`].
//!
//! Records are only ever pushed; nothing here edits or removes an
//! existing entry.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;

use crate::catalog;
use crate::error::{JournalError, ValidationError};
use crate::profile::{CompletionRecord, ReflectionRecord, UserProfile};
use crate::streak::{update_streak, StreakUpdate};

/// Set the user's name and start date, then count today toward the streak.
///
/// The name can only be set once per profile.
pub fn onboard(
    profile: &mut UserProfile,
    name: &str,
    start_date: NaiveDate,
    today: NaiveDate,
) -> Result<StreakUpdate, ValidationError> {
    if profile.is_onboarded() {
        return Err(ValidationError::AlreadyOnboarded {
            name: profile.name.clone(),
        });
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    profile.name = name.to_string();
    profile.start_date = start_date;
    debug!(user = name, %start_date, "profile onboarded");
    Ok(update_streak(profile, today))
}

/// Record that the user started challenge `challenge_id` on `today`.
///
/// Unknown ids leave the profile untouched. Starting the same challenge
/// again appends another record.
pub fn complete_challenge(
    profile: &mut UserProfile,
    challenge_id: u32,
    today: NaiveDate,
) -> Result<&CompletionRecord, JournalError> {
    let challenge = catalog::find_challenge(challenge_id)
        .ok_or(JournalError::UnknownChallenge { id: challenge_id })?;

    profile.completed_challenges.push(CompletionRecord {
        challenge_id: challenge.id,
        title: challenge.title.to_string(),
        completed_date: today,
        reflection: None,
    });
    debug!(
        challenge_id,
        total = profile.completed_challenges.len(),
        "challenge recorded"
    );

    let last = profile.completed_challenges.len() - 1;
    Ok(&profile.completed_challenges[last])
}

/// Append a reflection stamped with `now` (truncated to the minute).
///
/// Empty text is a valid entry.
pub fn save_reflection<'a>(
    profile: &'a mut UserProfile,
    text: &str,
    now: NaiveDateTime,
) -> &'a ReflectionRecord {
    let timestamp = truncate_to_minute(now);
    profile.reflection_entries.push(ReflectionRecord {
        timestamp,
        text: text.to_string(),
    });
    debug!(%timestamp, len = text.len(), "reflection saved");

    let last = profile.reflection_entries.len() - 1;
    &profile.reflection_entries[last]
}

/// Reflections, latest first.
pub fn reflections_newest_first(profile: &UserProfile) -> impl Iterator<Item = &ReflectionRecord> {
    profile.reflection_entries.iter().rev()
}

fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
