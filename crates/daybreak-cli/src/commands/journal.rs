use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Append a private journal entry
    Add {
        /// Platform user id
        #[arg(long)]
        user: String,
        /// Entry text
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show the most recent entries
    Recent {
        /// Platform user id
        #[arg(long)]
        user: String,
        /// How many entries to show (defaults to the configured window)
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut tracker, config) = super::open_tracker()?;

    match action {
        JournalAction::Add { user, text } => {
            let now = Utc::now();
            tracker.journal_append(&user, now, &text.join(" "))?;
            println!(
                "Journal entry saved for {} UTC.",
                now.format("%Y-%m-%d %H:%M")
            );
        }
        JournalAction::Recent { user, limit } => {
            let limit = limit.unwrap_or(config.journal.recent_limit);
            let entries = tracker.journal_recent(&user, limit)?;
            if entries.is_empty() {
                println!("No journal entries yet.");
            } else {
                for entry in entries {
                    println!(
                        "[{}] {}",
                        entry.date.format("%Y-%m-%d %H:%M"),
                        super::truncate_for_display(&entry.entry, config.journal.entry_display_chars)
                    );
                }
            }
        }
    }
    Ok(())
}
