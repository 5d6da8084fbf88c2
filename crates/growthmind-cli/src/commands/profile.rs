//! Profile setup commands.

use chrono::NaiveDate;
use clap::Subcommand;
use growthmind_core::storage::Database;
use growthmind_core::{onboard, Event};

use super::{load_onboarded, load_or_new, print_json, Clock, CmdResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Set your name and start date
    Init {
        /// Your name
        #[arg(long)]
        name: String,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Show the stored profile
    Show {
        /// Print the full profile as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProfileAction, clock: &Clock) -> CmdResult {
    let db = Database::open()?;

    match action {
        ProfileAction::Init { name, start_date } => {
            let mut profile = load_or_new(&db, clock)?;
            let start_date = start_date.unwrap_or(clock.today);
            let streak = onboard(&mut profile, &name, start_date, clock.today)?;
            db.save_profile(&profile)?;

            print_json(&Event::ProfileCreated {
                name: profile.name.clone(),
                start_date,
                streak,
            })
        }
        ProfileAction::Show { json } => {
            let profile = load_onboarded(&db)?;
            if json {
                return print_json(&profile);
            }
            println!("Name:           {}", profile.name);
            println!("Start date:     {}", profile.start_date);
            println!("Current streak: {}", profile.current_streak);
            println!("Longest streak: {}", profile.longest_streak);
            match profile.last_login {
                Some(d) => println!("Last login:     {d}"),
                None => println!("Last login:     never"),
            }
            println!("Completions:    {}", profile.completed_challenges.len());
            println!("Reflections:    {}", profile.reflection_entries.len());
            Ok(())
        }
    }
}
