use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "daybreak-cli", version, about = "Daybreak CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Challenge lifecycle
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Daily check-in processing
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Savings tracking
    Savings {
        #[command(subcommand)]
        action: commands::savings::SavingsAction,
    },
    /// Private journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Reward catalog inspection
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Savings { action } => commands::savings::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
