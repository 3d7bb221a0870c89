use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show a user's progress
    Show {
        /// Platform user id
        #[arg(long)]
        user: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (tracker, config) = super::open_tracker()?;

    match action {
        StatsAction::Show { user, json } => {
            let snapshot = tracker.snapshot(&user, Utc::now())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let symbol = &config.display.currency_symbol;
                println!("Challenge day:   {}", snapshot.challenge_day);
                println!("Current streak:  {} day(s)", snapshot.current_streak_days);
                println!("Longest streak:  {} day(s)", snapshot.longest_streak_days);
                println!("Days logged:     {}", snapshot.total_days_gambling_free);
                println!("Est. savings:    {symbol}{:.2}", snapshot.savings);
            }
        }
    }
    Ok(())
}
