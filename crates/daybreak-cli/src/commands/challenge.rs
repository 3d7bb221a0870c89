use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Start the recovery challenge for a user
    Start {
        /// Platform user id
        #[arg(long)]
        user: String,
        /// Display name
        #[arg(long)]
        name: String,
    },
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut tracker, _config) = super::open_tracker()?;

    match action {
        ChallengeAction::Start { user, name } => {
            let record = tracker.start(&user, &name, Utc::now())?;
            println!(
                "Challenge started for {} on {}. Check in once a day to build your streak.",
                record.username,
                record.start_date.format("%Y-%m-%d")
            );
        }
    }
    Ok(())
}
