use clap::Subcommand;

#[derive(Subcommand)]
pub enum SavingsAction {
    /// Log money kept out of gambling
    Add {
        /// Platform user id
        #[arg(long)]
        user: String,
        /// Amount to add (must be positive)
        amount: f64,
    },
}

pub fn run(action: SavingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut tracker, config) = super::open_tracker()?;

    match action {
        SavingsAction::Add { user, amount } => {
            let total = tracker.add_savings(&user, amount)?;
            let symbol = &config.display.currency_symbol;
            println!("Added {symbol}{amount:.2}. Total saved: {symbol}{total:.2}.");
        }
    }
    Ok(())
}
