use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, Result, TAG_DELIMITER};

const QUOTE_SELECTOR: &str = ".quote";
const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tag";
const NEXT_SELECTOR: &str = ".next > a";

/// A single quote scraped off a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl Record {
    /// Column names, in the same order `to_row` emits the cells.
    pub const FIELDS: [&'static str; 3] = ["text", "author", "tags"];

    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// Flattens the record into CSV cells. Tags share a single cell, joined by `TAG_DELIMITER`.
    pub fn to_row(&self) -> [String; 3] {
        [
            self.text.clone(),
            self.author.clone(),
            self.tags.join(TAG_DELIMITER),
        ]
    }
}

/// Everything one page contributes to the crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub records: Vec<Record>,
    /// Link target as written in the page, relative or absolute.
    pub next_link: Option<String>,
}

/// Parses the page on a blocking thread, extracting both the records and the next-page link.
pub(crate) async fn parse_page(html: String) -> Result<PageResult> {
    let page = spawn_blocking(move || -> Result<PageResult> {
        Ok(PageResult {
            records: extract_records(&html)?,
            next_link: extract_next_link(&html),
        })
    })
    .await??;

    Ok(page)
}

/// Extracts every quote on the page, in document order.
/// Fails if any quote block is missing its text or author.
pub fn extract_records(html: &str) -> Result<Vec<Record>> {
    let doc = Html::parse_document(html);

    // Create selectors.
    let quote_selector = create_selector(QUOTE_SELECTOR)?;
    let text_selector = create_selector(TEXT_SELECTOR)?;
    let author_selector = create_selector(AUTHOR_SELECTOR)?;
    let tag_selector = create_selector(TAG_SELECTOR)?;

    // The site lists 10 quotes per page.
    let mut records = Vec::with_capacity(10);
    for quote in doc.select(&quote_selector) {
        let text = first_text(quote, &text_selector, TEXT_SELECTOR)?;
        let author = first_text(quote, &author_selector, AUTHOR_SELECTOR)?;
        let tags = quote.select(&tag_selector).map(element_text).collect();

        records.push(Record { text, author, tags });
    }
    Ok(records)
}

/// Returns the `href` of the next-page link, or `None` on the last page.
pub fn extract_next_link(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let next_selector = Selector::parse(NEXT_SELECTOR).expect("NEXT_SELECTOR is a valid selector");

    doc.select(&next_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

fn first_text(parent: ElementRef<'_>, selector: &Selector, sel_str: &str) -> Result<String> {
    parent
        .select(selector)
        .next()
        .map(element_text)
        .ok_or_else(|| Error::MissingElement {
            selector: sel_str.into(),
        })
}

#[inline]
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
