use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use noon_product_crawler::{CrawlOptions, crawl_noon_to_csv};

#[derive(Parser)]
#[command(name = "noon_product_crawler")]
#[command(about = "Search the Noon catalog and save products to CSV")]
#[command(version)]
struct Cli {
    /// Search term to query
    query: String,

    /// Output CSV path
    #[arg(short, long, default_value = "noon_products.csv")]
    output: PathBuf,

    /// Result page to fetch
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Maximum number of products to request
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Append to the output file instead of overwriting it
    #[arg(short, long)]
    append: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let cli = Cli::parse();
    let options = CrawlOptions {
        output_path: cli.output,
        page: cli.page,
        limit: cli.limit,
        append: cli.append,
    };

    let written = crawl_noon_to_csv(&cli.query, &options)?;
    println!("{written}");
    Ok(())
}
