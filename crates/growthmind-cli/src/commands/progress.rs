use clap::Subcommand;
use growthmind_core::stats::{recent_completions, weekly_completion_series};
use growthmind_core::storage::Database;
use growthmind_core::{Config, ProgressSummary};

use super::{load_or_new, print_json, Clock, CmdResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Streaks, completion count and days since starting
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Completions per calendar week
    Weekly {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Most recent completions
    Recent {
        /// How many to show (defaults to display.recent_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: ProgressAction, clock: &Clock) -> CmdResult {
    let db = Database::open()?;
    let profile = load_or_new(&db, clock)?;

    match action {
        ProgressAction::Summary { json } => {
            let summary = ProgressSummary::compute(&profile, clock.today);
            if json {
                return print_json(&summary);
            }
            println!("Days since starting:  {}", summary.days_since_start);
            println!("Current streak:       {} days", summary.current_streak);
            println!("Longest streak:       {} days", summary.longest_streak);
            println!("Challenges completed: {}", summary.completed_count);
            println!("Overall progress:     {}%", summary.progress_percent());
            println!("Reflections:          {}", summary.reflection_count);
        }
        ProgressAction::Weekly { json } => {
            let series = weekly_completion_series(&profile);
            if json {
                return print_json(&series);
            }
            for bucket in &series {
                println!(
                    "{} .. {}  {:>3} {}",
                    bucket.week_starting(),
                    bucket.week_ending,
                    bucket.count,
                    "#".repeat(bucket.count as usize)
                );
            }
        }
        ProgressAction::Recent { limit } => {
            let limit = match limit {
                Some(limit) => limit,
                None => Config::load()?.display.recent_limit,
            };
            print_json(&recent_completions(&profile, limit))?;
        }
    }
    Ok(())
}
