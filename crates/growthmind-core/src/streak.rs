//! Consecutive-day streak tracking.
//!
//! A streak counts calendar days in a row on which the user interacted.
//! The user is always "in" a streak the moment they show up, so a first
//! login or a broken streak restarts the count at 1, never 0.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::profile::UserProfile;

/// What a streak update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakOutcome {
    /// No previous login; streak starts at 1.
    FirstLogin,
    /// Last login was yesterday; streak grew by one.
    Continued,
    /// Last login was two or more days ago; streak restarted at 1.
    Broken,
    /// Already counted today; nothing changed.
    SameDay,
    /// `today` is before the last login (clock moved backward); nothing changed.
    ClockSkew,
}

impl StreakOutcome {
    /// Whether the profile was modified.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            StreakOutcome::FirstLogin | StreakOutcome::Continued | StreakOutcome::Broken
        )
    }
}

/// Result of [`update_streak`], with before/after values for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    pub outcome: StreakOutcome,
    pub previous_streak: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_login: Option<NaiveDate>,
    /// Days between the previous login and `today`, if there was one.
    pub days_since_last_login: Option<i64>,
}

/// Fold `today` into the profile's streak.
///
/// Same-day calls are idempotent. A date earlier than `last_login` is
/// treated as a no-op: neither the streak nor `last_login` moves.
pub fn update_streak(profile: &mut UserProfile, today: NaiveDate) -> StreakUpdate {
    let previous_streak = profile.current_streak;

    let (outcome, delta) = match profile.last_login {
        None => {
            profile.current_streak = 1;
            (StreakOutcome::FirstLogin, None)
        }
        Some(last) => {
            let delta = (today - last).num_days();
            let outcome = match delta {
                1 => {
                    profile.current_streak += 1;
                    StreakOutcome::Continued
                }
                d if d > 1 => {
                    profile.current_streak = 1;
                    StreakOutcome::Broken
                }
                0 => StreakOutcome::SameDay,
                _ => StreakOutcome::ClockSkew,
            };
            (outcome, Some(delta))
        }
    };

    match outcome {
        StreakOutcome::ClockSkew => {
            warn!(
                last_login = ?profile.last_login,
                %today,
                "date moved backward; streak left unchanged"
            );
        }
        StreakOutcome::SameDay => {
            debug!(%today, "streak already counted today");
        }
        _ => {
            if profile.current_streak > profile.longest_streak {
                profile.longest_streak = profile.current_streak;
            }
            profile.last_login = Some(today);
            info!(
                ?outcome,
                current = profile.current_streak,
                longest = profile.longest_streak,
                "streak updated"
            );
        }
    }

    StreakUpdate {
        outcome,
        previous_streak,
        current_streak: profile.current_streak,
        longest_streak: profile.longest_streak,
        last_login: profile.last_login,
        days_since_last_login: delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile::new(day(2024, 1, 1))
    }

    #[test]
    fn first_login_starts_streak_at_one() {
        let mut p = profile();
        let d = day(2024, 1, 10);
        let update = update_streak(&mut p, d);
        assert_eq!(update.outcome, StreakOutcome::FirstLogin);
        assert_eq!(p.current_streak, 1);
        assert_eq!(p.longest_streak, 1);
        assert_eq!(p.last_login, Some(d));
        assert_eq!(update.days_since_last_login, None);
    }

    #[test]
    fn consecutive_days_build_streak() {
        let mut p = profile();
        let d = day(2024, 1, 10);
        update_streak(&mut p, d);
        update_streak(&mut p, d + Duration::days(1));
        let update = update_streak(&mut p, d + Duration::days(2));
        assert_eq!(update.outcome, StreakOutcome::Continued);
        assert_eq!(update.previous_streak, 2);
        assert_eq!(p.current_streak, 3);
        assert_eq!(p.longest_streak, 3);
    }

    #[test]
    fn gap_breaks_streak_but_keeps_longest() {
        let mut p = profile();
        let d = day(2024, 1, 10);
        update_streak(&mut p, d);
        update_streak(&mut p, d + Duration::days(1));
        let update = update_streak(&mut p, d + Duration::days(5));
        assert_eq!(update.outcome, StreakOutcome::Broken);
        assert_eq!(update.days_since_last_login, Some(4));
        assert_eq!(p.current_streak, 1);
        assert_eq!(p.longest_streak, 2);
        assert_eq!(p.last_login, Some(d + Duration::days(5)));
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut p = profile();
        let d = day(2024, 1, 10);
        update_streak(&mut p, d);
        update_streak(&mut p, d + Duration::days(1));
        let snapshot = p.clone();
        let update = update_streak(&mut p, d + Duration::days(1));
        assert_eq!(update.outcome, StreakOutcome::SameDay);
        assert!(!update.outcome.changed());
        assert_eq!(p, snapshot);
    }

    #[test]
    fn backward_date_is_a_no_op() {
        let mut p = profile();
        let d = day(2024, 1, 10);
        update_streak(&mut p, d);
        update_streak(&mut p, d + Duration::days(1));
        let snapshot = p.clone();
        let update = update_streak(&mut p, d - Duration::days(3));
        assert_eq!(update.outcome, StreakOutcome::ClockSkew);
        assert_eq!(update.days_since_last_login, Some(-4));
        assert_eq!(p, snapshot);
    }

    #[test]
    fn new_run_can_overtake_longest() {
        let mut p = profile();
        let d = day(2024, 2, 1);
        update_streak(&mut p, d);
        update_streak(&mut p, d + Duration::days(1));
        update_streak(&mut p, d + Duration::days(10));
        for offset in 11..=13 {
            update_streak(&mut p, d + Duration::days(offset));
        }
        assert_eq!(p.current_streak, 4);
        assert_eq!(p.longest_streak, 4);
    }

    #[test]
    fn month_and_year_boundaries_count_as_consecutive() {
        let mut p = profile();
        update_streak(&mut p, day(2023, 12, 31));
        update_streak(&mut p, day(2024, 1, 1));
        update_streak(&mut p, day(2024, 1, 2));
        assert_eq!(p.current_streak, 3);

        let mut p = profile();
        update_streak(&mut p, day(2024, 2, 28));
        update_streak(&mut p, day(2024, 2, 29));
        update_streak(&mut p, day(2024, 3, 1));
        assert_eq!(p.current_streak, 3);
    }
}
