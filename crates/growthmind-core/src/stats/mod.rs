//! Progress statistics for Growthmind
//!
//! Read-only views over a [`UserProfile`](crate::UserProfile): completion
//! counts, overall progress through the catalog, and a weekly completion
//! time series. Nothing in this module mutates the profile.

mod progress;
mod weekly;

pub use progress::{
    completed_count, days_since_start, overall_progress_ratio, recent_completions,
    ProgressSummary,
};

pub use weekly::{week_ending, weekly_completion_series, WeeklyBucket};
