//! Walks through exploring a housing table and fitting increasingly complex models.
//!
//! cargo run --example housing_walkthrough -- [config.toml]

use housing::config::ExperimentConfig;
use housing::experiment;
use housing::table::{synthetic, Table};
use tracing_subscriber::EnvFilter;

fn inspect(table: &Table) {
    let (rows, columns) = table.shape();
    println!("{rows} rows, {columns} columns: {:?}", table.column_names());
    println!("{}", table.head(5));

    for summary in table.describe() {
        println!(
            "{:>12}  count={:<6} mean={:<12.2} std={:<12.2} min={:<10.2} max={:.2}",
            summary.name, summary.count, summary.mean, summary.std, summary.min, summary.max
        );
    }
}

fn main() -> housing::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "demos/housing.toml".to_string());
    let config = ExperimentConfig::load(&path)?;

    let table = match &config.data {
        Some(data) => Table::from_csv_path(data)?,
        None => synthetic::housing(config.synthetic_rows, config.seed)?,
    };
    inspect(&table);

    let large = table.filter("sqft_living", |sqft| sqft > 3000.0)?;
    println!("\nHouses over 3000 sqft: {}", large.row_count());
    println!("{}", large.select(&["sqft_living", "price"])?.head(3));

    println!();
    for outcome in experiment::run_on_table(&config, &table)? {
        println!("{} {:?}", outcome.name, outcome.features);
        println!(
            "  intercept={:.2} coefficients={:?}",
            outcome.model.intercept, outcome.model.coefficients
        );
        println!("  train: {}", outcome.train);
        println!("  test:  {}", outcome.test);
    }

    Ok(())
}
