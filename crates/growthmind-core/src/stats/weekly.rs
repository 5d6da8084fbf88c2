//! Weekly completion time series.
//!
//! Completions are bucketed into calendar weeks running Monday through
//! Sunday, each bucket labelled by its closing Sunday. The series spans
//! from the first to the last week that has a completion, and weeks in
//! between with no completions are present with a zero count.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::profile::UserProfile;

/// Completions counted within one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// Sunday closing the week.
    pub week_ending: NaiveDate,
    pub count: u32,
}

impl WeeklyBucket {
    /// Monday opening the week.
    pub fn week_starting(&self) -> NaiveDate {
        self.week_ending
            .checked_sub_days(Days::new(6))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// The Sunday on or after `date`.
///
/// The final week of the calendar range has no Sunday after it and is
/// labelled by [`NaiveDate::MAX`] instead.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_to_sunday = 6 - u64::from(date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(days_to_sunday))
        .unwrap_or(NaiveDate::MAX)
}

/// Gap-filled weekly completion counts in chronological order.
///
/// An empty log yields an empty series.
pub fn weekly_completion_series(profile: &UserProfile) -> Vec<WeeklyBucket> {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for record in &profile.completed_challenges {
        *counts.entry(week_ending(record.completed_date)).or_insert(0) += 1;
    }

    let (Some((&first, _)), Some((&last, _))) = (counts.first_key_value(), counts.last_key_value())
    else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut week = first;
    loop {
        series.push(WeeklyBucket {
            week_ending: week,
            count: counts.get(&week).copied().unwrap_or(0),
        });
        if week >= last {
            break;
        }
        // `last` may be the clamped MAX label, which is off the Sunday grid.
        week = week
            .checked_add_days(Days::new(7))
            .map_or(last, |next| next.min(last));
    }
    series
}
