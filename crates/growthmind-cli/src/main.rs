use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Clock;

#[derive(Parser)]
#[command(name = "growthmind", version, about = "Growth mindset challenge tracker")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Home view: count today's visit and show progress
    Status(commands::status::StatusArgs),
    /// Profile setup and details
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Count today toward the streak
    Checkin,
    /// Browse and start challenges
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Reflection journal
    Reflect {
        #[command(subcommand)]
        action: commands::reflect::ReflectAction,
    },
    /// Progress statistics
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Export the growth journal as JSON
    Export(commands::export::ExportArgs),
    /// Restore a session from an exported journal
    Import(commands::export::ImportArgs),
    /// Print a random growth mindset quote
    Quote(commands::quote::QuoteArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Session lifecycle
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let clock = Clock::read(cli.today);
    tracing::debug!(today = %clock.today, "clock read");

    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args, &clock),
        Commands::Profile { action } => commands::profile::run(action, &clock),
        Commands::Checkin => commands::checkin::run(&clock),
        Commands::Challenge { action } => commands::challenge::run(action, &clock),
        Commands::Reflect { action } => commands::reflect::run(action, &clock),
        Commands::Progress { action } => commands::progress::run(action, &clock),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Import(args) => commands::export::run_import(args),
        Commands::Quote(args) => commands::quote::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Session { action } => commands::session::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
