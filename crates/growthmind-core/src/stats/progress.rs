//! Summary counts over a profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::profile::{CompletionRecord, UserProfile};

/// Number of challenge completions recorded.
pub fn completed_count(profile: &UserProfile) -> usize {
    profile.completed_challenges.len()
}

/// Completions over catalog size, clamped to 1.0.
///
/// Repeated completions of the same challenge count individually, hence
/// the clamp.
pub fn overall_progress_ratio(profile: &UserProfile) -> f64 {
    let total = catalog::catalog_size();
    if total == 0 {
        return 0.0;
    }
    (completed_count(profile) as f64 / total as f64).min(1.0)
}

/// Whole days from the profile's start date to `today`.
///
/// Negative when the start date lies in the future.
pub fn days_since_start(profile: &UserProfile, today: NaiveDate) -> i64 {
    (today - profile.start_date).num_days()
}

/// The last `n` completions, newest first.
pub fn recent_completions(profile: &UserProfile, n: usize) -> Vec<&CompletionRecord> {
    profile.completed_challenges.iter().rev().take(n).collect()
}

/// Everything the progress view shows, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_count: usize,
    pub catalog_size: usize,
    pub progress_ratio: f64,
    pub days_since_start: i64,
    pub reflection_count: usize,
}

impl ProgressSummary {
    pub fn compute(profile: &UserProfile, today: NaiveDate) -> Self {
        Self {
            name: profile.name.clone(),
            current_streak: profile.current_streak,
            longest_streak: profile.longest_streak,
            completed_count: completed_count(profile),
            catalog_size: catalog::catalog_size(),
            progress_ratio: overall_progress_ratio(profile),
            days_since_start: days_since_start(profile, today),
            reflection_count: profile.reflection_entries.len(),
        }
    }

    /// Progress as a whole percentage, for display.
    pub fn progress_percent(&self) -> u32 {
        (self.progress_ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{complete_challenge, save_reflection};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ratio_tracks_completions() {
        let mut p = UserProfile::new(day(2024, 1, 1));
        assert_eq!(overall_progress_ratio(&p), 0.0);
        for id in 1..=3 {
            complete_challenge(&mut p, id, day(2024, 1, 2)).unwrap();
        }
        assert_eq!(completed_count(&p), 3);
        assert!((overall_progress_ratio(&p) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_is_clamped_at_one() {
        let mut p = UserProfile::new(day(2024, 1, 1));
        for _ in 0..20 {
            complete_challenge(&mut p, 4, day(2024, 1, 2)).unwrap();
        }
        assert_eq!(completed_count(&p), 20);
        assert_eq!(overall_progress_ratio(&p), 1.0);
    }

    #[test]
    fn days_since_start_counts_whole_days() {
        let p = UserProfile::new(day(2024, 1, 1));
        assert_eq!(days_since_start(&p, day(2024, 1, 1)), 0);
        assert_eq!(days_since_start(&p, day(2024, 3, 1)), 60);
        assert_eq!(days_since_start(&p, day(2023, 12, 30)), -2);
    }

    #[test]
    fn recent_completions_newest_first() {
        let mut p = UserProfile::new(day(2024, 1, 1));
        for id in [1, 2, 3, 4] {
            complete_challenge(&mut p, id, day(2024, 1, 2)).unwrap();
        }
        let ids: Vec<u32> = recent_completions(&p, 3).iter().map(|r| r.challenge_id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
        assert_eq!(recent_completions(&p, 10).len(), 4);
    }

    #[test]
    fn summary_collects_all_counts() {
        let mut p = UserProfile::new(day(2024, 1, 1));
        p.name = "Ada".into();
        complete_challenge(&mut p, 6, day(2024, 1, 5)).unwrap();
        save_reflection(&mut p, "noted", day(2024, 1, 5).and_hms_opt(10, 0, 0).unwrap());

        let summary = ProgressSummary::compute(&p, day(2024, 1, 11));
        assert_eq!(summary.name, "Ada");
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.catalog_size, 15);
        assert_eq!(summary.days_since_start, 10);
        assert_eq!(summary.reflection_count, 1);
        assert_eq!(summary.progress_percent(), 7);
    }
}
