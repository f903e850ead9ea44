use crate::error::Result;
use reqwest::{Client, Url};
use tracing::debug;

/// Raw answer of a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page>;
}

/// Fetches pages over HTTP with the shared client (timeout and user agent
/// are set on the client).
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        debug!("GET {} -> {}", url, status);

        let body = response.text().await?;
        Ok(Page { status, body })
    }
}
