use chrono::Utc;
use clap::Subcommand;
use daybreak_core::{ChallengeError, CoreError};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Log today's check-in for a user
    Log {
        /// Platform user id
        #[arg(long)]
        user: String,
    },
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut tracker, _config) = super::open_tracker()?;

    match action {
        CheckinAction::Log { user } => {
            let now = Utc::now();
            match tracker.check_in(&user, now) {
                Ok(success) => {
                    println!(
                        "Check-in logged: day {} of your journey, current streak {} day(s).",
                        success.challenge_day, success.current_streak_days
                    );
                    for message in &success.unlocked {
                        println!("Reward unlocked - {message}");
                    }
                }
                // A repeat on the same date is a normal outcome, not an
                // error exit.
                Err(CoreError::Challenge(ChallengeError::AlreadyCheckedInToday { date })) => {
                    println!("You've already checked in for {date}.");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}
