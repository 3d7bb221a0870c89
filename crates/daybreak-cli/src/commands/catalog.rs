use clap::Subcommand;
use daybreak_core::Config;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Check the configured catalog for malformed tier keys
    Validate,
    /// Print the catalog as JSON
    Show,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = super::load_catalog(&config)?;

    match action {
        CatalogAction::Validate => {
            let malformed = catalog.validate();
            if malformed.is_empty() {
                println!("Catalog OK: {} tier(s) defined.", catalog.tier_count());
            } else {
                println!(
                    "Catalog has {} tier(s); {} will be skipped:",
                    catalog.tier_count(),
                    malformed.len()
                );
                for key in malformed {
                    println!("  {key}");
                }
            }
        }
        CatalogAction::Show => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }
    Ok(())
}
