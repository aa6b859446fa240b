//! Catalog browsing commands.

use clap::Subcommand;

use lithos_core::{CatalogEntry, Config};

use super::{build_engine, CommandResult, GlobalOpts};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog entries
    List {
        /// Only entries in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one entry in full
    Show {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: CatalogAction, global: &GlobalOpts) -> CommandResult {
    let config = Config::load_or_default();
    let engine = build_engine(global, &config)?;
    let catalog = engine.catalog();

    match action {
        CatalogAction::List { category } => {
            let entries: Vec<&CatalogEntry> = match &category {
                Some(tag) => catalog.by_category(tag),
                None => catalog.all().iter().collect(),
            };

            if global.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No entries found.");
            } else {
                for entry in entries {
                    println!(
                        "{:<18} {:<18} {:<12} {}",
                        entry.id,
                        entry.name(),
                        entry.display.category,
                        entry.base_score
                    );
                }
            }
        }
        CatalogAction::Show { id } => {
            let entry = catalog
                .by_id(&id)
                .ok_or_else(|| format!("no catalog entry with id '{id}'"))?;

            if global.json {
                println!("{}", serde_json::to_string_pretty(entry)?);
                return Ok(());
            }

            let moods: Vec<_> = entry.emotion_tags.iter().map(|m| m.name()).collect();
            let personality: String = entry.personality_tags.iter().collect();
            println!("{} ({})", entry.name(), entry.id);
            println!("  Color:        {}", entry.display.color);
            println!("  Category:     {}", entry.display.category);
            println!("  Chakra:       {}", entry.chakra);
            println!("  Element:      {}", entry.element.name());
            println!("  Energy:       {:?}", entry.energy_levels);
            println!("  Moods:        {}", moods.join(", "));
            println!("  Personality:  {personality}");
            println!("  Effects:      {}", entry.effect_tags.join(", "));
            println!("  Evidence:     {}", entry.evidence_level.name());
            println!("  Base score:   {}", entry.base_score);
            println!("  Usage:        {}", entry.usage_template);
        }
    }
    Ok(())
}
