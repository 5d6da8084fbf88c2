use clap::Args;
use growthmind_core::catalog::random_quote;
use growthmind_core::stats::recent_completions;
use growthmind_core::storage::Database;
use growthmind_core::{update_streak, Config, ProgressSummary, StreakUpdate};
use serde::Serialize;

use super::{print_json, Clock, CmdResult};

#[derive(Args)]
pub struct StatusArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// JSON shape when there is no onboarded profile yet.
#[derive(Serialize)]
struct WelcomeView {
    onboarded: bool,
}

#[derive(Serialize)]
struct StatusView<'a> {
    onboarded: bool,
    streak: StreakUpdate,
    summary: ProgressSummary,
    recent: Vec<&'a growthmind_core::CompletionRecord>,
    quote: Option<&'static growthmind_core::Quote>,
}

pub fn run(args: StatusArgs, clock: &Clock) -> CmdResult {
    let db = Database::open()?;
    let config = Config::load()?;

    let mut profile = match db.load_profile()? {
        Some(p) if p.is_onboarded() => p,
        _ if args.json => return print_json(&WelcomeView { onboarded: false }),
        _ => {
            println!("Welcome to Growthmind!");
            println!("Start with: growthmind profile init --name <NAME>");
            return Ok(());
        }
    };

    // Visiting the home view counts as today's interaction.
    let streak = update_streak(&mut profile, clock.today);
    if streak.outcome.changed() {
        db.save_profile(&profile)?;
    }

    let summary = ProgressSummary::compute(&profile, clock.today);
    let recent = recent_completions(&profile, config.display.recent_limit);
    let quote = config.display.show_quote.then(random_quote);

    if args.json {
        return print_json(&StatusView {
            onboarded: true,
            streak,
            summary,
            recent,
            quote,
        });
    }

    println!("Hello, {}!", summary.name);
    println!("Current streak:       {} days", summary.current_streak);
    println!("Longest streak:       {} days", summary.longest_streak);
    println!(
        "Challenges completed: {} ({}% of {})",
        summary.completed_count,
        summary.progress_percent(),
        summary.catalog_size
    );
    if !recent.is_empty() {
        println!();
        println!("Recently completed:");
        for record in &recent {
            println!("  {} (completed on {})", record.title, record.completed_date);
        }
    }
    if let Some(q) = quote {
        println!();
        println!("\"{}\"", q.quote);
        println!("  -- {}", q.author);
    }
    Ok(())
}
