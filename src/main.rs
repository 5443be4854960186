mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use cli::Cli;
use rental_dash::{load_file, DashState};

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let dataset = load_file(&config.source, config.parse_policy)
        .with_context(|| format!("loading listings from {}", config.source.display()))?;
    let dataset = Arc::new(dataset);

    let mut state = DashState::new(Arc::clone(&dataset), &config);
    if let Some(city) = cli.city {
        state.select_city(city);
    }
    if let Some([first, second]) = cli.compare.as_deref() {
        state.select_comparison(first.as_str(), second.as_str());
    }

    let (overview, map, comparison) = (state.overview(), state.map(), state.comparison());

    if cli.json {
        let pages = json!({
            "cities": state.city_options(),
            "rejected_records": dataset.rejected().len(),
            "overview": overview,
            "map": map,
            "comparison": comparison,
        });
        let text = serde_json::to_string_pretty(&pages).context("serializing views")?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "{} listings in {} cities ({} records skipped)",
        dataset.len(),
        state.city_options().len(),
        dataset.rejected().len()
    );
    for page in [
        overview.map(|v| v.to_string()),
        map.map(|v| v.to_string()),
        comparison.map(|v| v.to_string()),
    ]
    .into_iter()
    .flatten()
    {
        println!();
        print!("{page}");
    }
    Ok(())
}
