use std::path::PathBuf;

use url::Url;

use crate::{Error, Result, BASE_URL, OUTPUT_PATH};

/// Everything a single crawl run needs to know.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// First page to fetch, and the base every next-link is resolved against.
    pub base_url: Url,
    /// Where the CSV ends up once the crawl succeeds.
    pub output_path: PathBuf,
    /// Upper bound on fetched pages. `None` means no limit.
    pub max_pages: Option<usize>,
}

impl CrawlConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.into(),
            source,
        })?;
        Ok(Self {
            base_url,
            output_path: PathBuf::from(OUTPUT_PATH),
            max_pages: None,
        })
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BASE_URL).expect("BASE_URL is a valid url"),
            output_path: PathBuf::from(OUTPUT_PATH),
            max_pages: None,
        }
    }
}
