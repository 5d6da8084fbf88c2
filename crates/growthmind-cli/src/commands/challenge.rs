//! Challenge catalog commands.

use clap::Subcommand;
use growthmind_core::catalog::{all_challenges, challenges_for_tier, find_challenge};
use growthmind_core::storage::Database;
use growthmind_core::{complete_challenge, ChallengeDefinition, Event, JournalError, Tier};

use super::{load_or_new, print_json, Clock, CmdResult};

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// List challenges, optionally for one tier
    List {
        /// beginner, intermediate or advanced
        #[arg(long)]
        tier: Option<Tier>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one challenge
    Show {
        /// Challenge id
        id: u32,
    },
    /// Start a challenge today
    Start {
        /// Challenge id
        id: u32,
    },
    /// List challenges you have started
    Completed {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_card(challenge: &ChallengeDefinition) {
    println!("[{}] {}", challenge.id, challenge.title);
    println!("    {} | {}", challenge.duration_label(), challenge.category);
    println!("    {}", challenge.description);
}

pub fn run(action: ChallengeAction, clock: &Clock) -> CmdResult {
    match action {
        ChallengeAction::List { tier, json } => {
            let challenges: Vec<&ChallengeDefinition> = match tier {
                Some(tier) => challenges_for_tier(tier).iter().collect(),
                None => all_challenges().collect(),
            };
            if json {
                return print_json(&challenges);
            }
            let mut current: Option<Tier> = None;
            for challenge in challenges {
                if current != Some(challenge.tier) {
                    current = Some(challenge.tier);
                    println!("== {} ==", challenge.tier.label());
                }
                print_card(challenge);
            }
        }
        ChallengeAction::Show { id } => {
            let challenge = find_challenge(id).ok_or(JournalError::UnknownChallenge { id })?;
            print_json(challenge)?;
        }
        ChallengeAction::Start { id } => {
            let db = Database::open()?;
            let mut profile = load_or_new(&db, clock)?;
            let record = complete_challenge(&mut profile, id, clock.today)?;
            let event = Event::challenge_started(record);
            db.save_profile(&profile)?;
            print_json(&event)?;
        }
        ChallengeAction::Completed { json } => {
            let db = Database::open()?;
            let profile = load_or_new(&db, clock)?;
            if json {
                return print_json(&profile.completed_challenges);
            }
            if profile.completed_challenges.is_empty() {
                println!("No challenges started yet.");
            }
            for record in &profile.completed_challenges {
                println!("{} (completed on {})", record.title, record.completed_date);
            }
        }
    }
    Ok(())
}
