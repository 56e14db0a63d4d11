use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The element you are trying to scrape for is missing. Selector: {selector}")]
    MissingElement { selector: String },
    #[error("Couldn't compile selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Next-page chain loops back to an already visited page: {0}")]
    CycleDetected(String),
    #[error("Crawl exceeded the page limit of {0} pages")]
    PageLimitExceeded(usize),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Fetch(#[from] reqwest::Error),
}
