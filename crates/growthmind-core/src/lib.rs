//! # Growthmind Core Library
//!
//! This library provides the core logic for Growthmind, a growth-mindset
//! challenge tracker. Every operation works on an explicit [`UserProfile`]
//! and takes the current date or time as a parameter; nothing here reads
//! the clock. Hosts (the CLI binary) own the profile's lifecycle.
//!
//! ## Architecture
//!
//! - **Catalog**: Static challenge tiers and quote pool
//! - **Streak**: Consecutive-day streak tracking
//! - **Journal**: Append-only completion and reflection logs
//! - **Stats**: Progress summary and weekly completion series
//! - **Export**: Lossless JSON snapshot of a profile
//! - **Storage**: TOML configuration and SQLite session store for hosts
//!
//! ## Key Components
//!
//! - [`UserProfile`]: The session's state
//! - [`update_streak`]: Streak tracker entry point
//! - [`complete_challenge`] / [`save_reflection`]: Journal writes
//! - [`ProgressSummary`]: Aggregated progress view
//! - [`Database`]: Session persistence
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod export;
pub mod journal;
pub mod profile;
pub mod stats;
pub mod storage;
pub mod streak;

pub use catalog::{ChallengeDefinition, Quote};
pub use error::{ConfigError, CoreError, DatabaseError, ExportError, JournalError, ValidationError};
pub use events::Event;
pub use export::{export, import, DEFAULT_EXPORT_FILE_NAME};
pub use journal::{complete_challenge, onboard, save_reflection};
pub use profile::{CompletionRecord, ReflectionRecord, Tier, UserProfile};
pub use stats::{weekly_completion_series, ProgressSummary, WeeklyBucket};
pub use storage::{Config, Database};
pub use streak::{update_streak, StreakOutcome, StreakUpdate};
