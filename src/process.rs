use std::collections::HashSet;

use chrono::Local;
use url::Url;

use crate::config::CrawlConfig;
use crate::output::write_records;
use crate::parse::{parse_page, Record};
use crate::request::{Fetch, HttpFetcher};
use crate::{info_time, Error, Result};

/// Crawls the whole site and writes the results to `config.output_path`.
/// Nothing is written unless every page was fetched and parsed.
pub async fn process_site(config: &CrawlConfig) -> Result<()> {
    let fetcher = HttpFetcher::new(reqwest::Client::new());
    let records = crawl(&fetcher, config).await?;

    let local_now = Local::now();
    write_records(&config.output_path, &records).await?;
    info_time!(
        local_now,
        "Wrote {} records to file: {}",
        records.len(),
        config.output_path.display()
    );

    Ok(())
}

/// Follows the next-page links starting at `config.base_url`, collecting the records of every page
/// in page order. Stops on the first page without a next link.
pub async fn crawl<F: Fetch>(fetcher: &F, config: &CrawlConfig) -> Result<Vec<Record>> {
    let start_time = Local::now();
    info_time!("Started scraping {}", config.base_url);

    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut current_url = config.base_url.clone();

    loop {
        if let Some(limit) = config.max_pages {
            if visited.len() >= limit {
                return Err(Error::PageLimitExceeded(limit));
            }
        }
        if !visited.insert(current_url.clone()) {
            return Err(Error::CycleDetected(current_url.into()));
        }

        let html = fetcher.fetch(&current_url).await?;
        let page = parse_page(html).await?;
        info_time!("Parsed {} quotes from {}", page.records.len(), current_url);
        records.extend(page.records);

        match page.next_link {
            Some(next) => current_url = resolve_next(&config.base_url, &next)?,
            None => break,
        }
    }

    info_time!(
        start_time,
        "Finished scraping: {} quotes across {} pages.",
        records.len(),
        visited.len()
    );
    Ok(records)
}

/// Resolves a next-link against the base URL. Absolute links replace the base entirely.
pub fn resolve_next(base: &Url, next: &str) -> Result<Url> {
    base.join(next).map_err(|source| Error::InvalidUrl {
        url: next.into(),
        source,
    })
}
