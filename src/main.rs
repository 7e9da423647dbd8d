use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dishcover::{card, catalog, config::Config, session::SearchSession, spoonacular::SearchClient};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Ingredients to cook with, e.g. Chicken Garlic "Olive Oil"
    ingredients: Vec<String>,

    /// Print the ingredient catalog filtered by this query instead of
    /// searching (empty string lists everything)
    #[arg(long)]
    browse: Option<String>,

    /// Override the number of candidate recipes fetched
    #[arg(long)]
    number: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    if let Some(query) = args.browse.as_deref() {
        for name in catalog::filter(query) {
            println!("{name}  /ingredient/{}", catalog::slug(name));
        }

        // Category sections follow the filtered list, as on the browse page.
        for &(category, members) in catalog::CATEGORIES {
            println!("\n{category}");
            for &name in members {
                println!("  {name}  /ingredient/{}", catalog::slug(name));
            }
        }
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(number) = args.number {
        config.result_cap = number;
    }

    let client = SearchClient::new(config)?;
    let mut session = SearchSession::new();
    for name in &args.ingredients {
        session.toggle(name);
    }

    session.run_search(&client).await;

    if let Some(message) = session.message() {
        println!("{message}");
    }

    for record in session.records() {
        let Some(view) = card::compose(Some(record), false, false) else {
            continue;
        };

        println!("\n== {} ==", view.title);
        if let (Some(matching), Some(missing)) = (view.matching_count, view.missing_count) {
            println!("matching ingredients: {matching}, missing: {missing}");
        }
        println!("ingredients: {}", view.ingredient_tags.join(", "));
        for (number, step) in &view.steps {
            println!("  {number}. {step}");
        }
        if let Some(url) = &view.source_url {
            println!("full recipe: {url}");
        }
    }

    Ok(())
}
