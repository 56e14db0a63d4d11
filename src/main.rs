use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use quotescrap::{info_time, process::process_site, CrawlConfig, Result, BASE_URL, OUTPUT_PATH};

/// Scrape every quote on the site into a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Where to write the CSV.
    #[arg(value_name = "OUTPUT", default_value = OUTPUT_PATH)]
    output: PathBuf,

    /// Page the crawl starts from.
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Fail instead of fetching more than this many pages.
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    max_pages: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CrawlConfig::new(&cli.base_url)?
        .with_output_path(cli.output)
        .with_max_pages(cli.max_pages);

    let start_time = Local::now();
    process_site(&config).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
