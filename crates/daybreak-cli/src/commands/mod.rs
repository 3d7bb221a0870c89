pub mod catalog;
pub mod challenge;
pub mod checkin;
pub mod journal;
pub mod savings;
pub mod stats;

use daybreak_core::{Config, ProgressStore, RecoveryTracker, RewardCatalog};

/// Load the configured reward catalog, printing validation warnings.
pub fn load_catalog(config: &Config) -> Result<RewardCatalog, Box<dyn std::error::Error>> {
    let path = config.catalog_path()?;
    let catalog = RewardCatalog::load_or_default(&path);
    for key in catalog.validate() {
        eprintln!("warning: skipping reward tier with invalid key '{key}'");
    }
    Ok(catalog)
}

/// Open the tracker over the default store with the configured catalog.
pub fn open_tracker() -> Result<(RecoveryTracker, Config), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = load_catalog(&config)?;
    let store = ProgressStore::open()?;
    let tracker = RecoveryTracker::with_store(store, catalog, config.rewards.seed);
    Ok((tracker, config))
}

/// Cap `text` at `max` characters for display, marking the cut.
pub fn truncate_for_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
