//! Scrapes every quote off a paginated listing site, following the "next" link
//! from page to page, and stores them in a CSV file.

pub mod config;
mod error;
mod macros;
pub mod output;
pub mod parse;
pub mod process;
pub mod request;

pub use config::CrawlConfig;
pub use error::{Error, Result};
pub use parse::{PageResult, Record};

pub const BASE_URL: &str = "https://quotes.toscrape.com/";
pub const OUTPUT_PATH: &str = "quotes.csv";
/// Separates the tags inside their single CSV cell.
pub const TAG_DELIMITER: &str = ";";
