use std::future::Future;

use reqwest::Client;
use url::Url;

use crate::Result;

/// Something that can turn a URL into the page's HTML.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages over HTTP with a plain GET.
/// The status code isn't inspected, a non-2xx response hands back whatever body the server sent.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    // Client uses Arc so we can clone cheaply
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    /// Requests a page and returns a `Result<String>` containing the HTML.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send {
        let request = self.client.get(url.clone());
        async move {
            let res = request.send().await?;
            let html = res.text().await?;
            Ok(html)
        }
    }
}
