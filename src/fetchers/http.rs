use crate::Result;
use crate::config::HttpConfig;
use crate::fetcher::{FetchRequest, Fetcher};
use crate::utils::random_delay;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::debug;

/// Stateless GET with browser-like headers. Session state is ignored.
pub struct HttpFetcher {
    client: Client,
    delays_ms: Vec<u64>,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            delays_ms: config.delays_ms.clone(),
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<String> {
        random_delay(&self.delays_ms);

        debug!(source = %request.source, url = request.url, "GET");
        let response = self.client.get(request.url).send()?.error_for_status()?;
        let html = response.text()?;
        debug!(source = %request.source, bytes = html.len(), "page received");

        Ok(html)
    }
}
