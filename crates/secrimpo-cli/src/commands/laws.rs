//! Laws command - search the catalog of Brazilian laws.

use clap::Args;
use console::style;

use secrimpo_core::laws::{categories, laws_by_category, search_laws, LawEntry};

/// Arguments for the laws command.
#[derive(Args)]
pub struct LawsArgs {
    /// Search term matched against abbreviation, name, description and category
    term: Option<String>,

    /// List the laws of a category instead of searching
    #[arg(long, conflicts_with = "term")]
    category: Option<String>,

    /// List the known categories
    #[arg(long, conflicts_with_all = ["term", "category"])]
    categories: bool,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: LawsArgs) -> anyhow::Result<()> {
    if args.categories {
        for category in categories() {
            println!("{}", category);
        }
        return Ok(());
    }

    let laws = match &args.category {
        Some(category) => laws_by_category(category),
        None => search_laws(args.term.as_deref().unwrap_or("")),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&laws)?);
        return Ok(());
    }

    if laws.is_empty() {
        println!("{} No laws found", style("ℹ").blue());
        return Ok(());
    }

    for law in laws {
        print_law(law);
    }

    Ok(())
}

fn print_law(law: &LawEntry) {
    println!(
        "{} {} ({}, {})",
        style(law.abbreviation).bold(),
        law.name,
        law.year,
        law.category
    );
    println!("    {}", law.description);
}
