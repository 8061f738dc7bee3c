pub mod config_cmd;
pub mod issues;
pub mod products;
pub mod skin;
pub mod tag;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fridge_core::{DayContext, ProductRef};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fridge")]
#[command(version, about = "Skincare fridge: AM/PM routines and ingredient conflict warnings")]
pub struct Cli {
    /// Path to fridge.toml
    #[arg(
        long,
        global = true,
        env = "FRIDGE_CONFIG",
        default_value = "fridge.toml"
    )]
    pub config: PathBuf,

    /// Fridge API base URL (overrides config file)
    #[arg(long, global = true, env = "FRIDGE_API_URL")]
    pub api_url: Option<String>,

    /// Frontend base URL serving data/tags.json (overrides config file)
    #[arg(long, global = true, env = "FRIDGE_FRONTEND_URL")]
    pub frontend_url: Option<String>,

    /// Routine to work on: AM or PM (overrides config file)
    #[arg(long, global = true, env = "FRIDGE_DAY")]
    pub day: Option<DayContext>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show compatibility issues for the routine
    Issues(IssuesArgs),
    /// Deduplicate a rules JSON file offline
    Dedup(DedupArgs),
    /// Look up a tag description
    Tag(TagArgs),
    /// Product operations
    #[command(subcommand)]
    Products(ProductCommands),
    /// Skin type on record
    #[command(subcommand)]
    SkinType(SkinTypeCommands),
    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct IssuesArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print glossary descriptions for every tag shown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct DedupArgs {
    /// Rules payload, as served by GET /{day}/rules/
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products in the routine
    List,
    /// Add a product by name
    Add { query: String },
    /// Remove a product
    Remove { id: String },
    /// Show a product's rating
    Rating { id: String },
    /// Rate a product (0-5 stars)
    Rate { id: String, stars: u8 },
}

#[derive(Subcommand, Debug)]
pub enum SkinTypeCommands {
    Show,
    Set { value: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Validate,
    Show,
}

/// Numeric ids stay numeric; anything else is a product name.
pub fn parse_product_ref(raw: &str) -> ProductRef {
    match raw.trim().parse::<i64>() {
        Ok(id) => ProductRef::Id(id),
        Err(_) => ProductRef::Name(raw.trim().to_string()),
    }
}

/// A table cell exactly `width` chars wide: clipped with "…" or padded.
pub fn cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
