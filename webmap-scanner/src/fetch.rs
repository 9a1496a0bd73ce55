use crate::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// What came back from a single page fetch.
///
/// Every variant is page-local. The crawl engine reports the failure and
/// moves on to the next frontier entry; nothing here aborts a crawl.
#[derive(Debug)]
pub enum FetchOutcome {
    Success {
        body: String,
    },
    HttpFailure {
        url: String,
        status: StatusCode,
    },
    TransportFailure {
        url: String,
        detail: String,
    },
    WrongContentType {
        url: String,
        content_type: Option<String>,
    },
}

/// Retrieves pages over HTTP and classifies each outcome.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// Issues one GET and classifies the result. No retries; a failed URL is
    /// failed for the rest of the run.
    pub async fn fetch(&self, url: &Url) -> FetchOutcome {
        debug!("Fetching {}", url);

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                return FetchOutcome::TransportFailure {
                    url: url.to_string(),
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::HttpFailure {
                url: url.to_string(),
                status,
            };
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let is_html = content_type
            .as_ref()
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false);

        if !is_html {
            return FetchOutcome::WrongContentType {
                url: url.to_string(),
                content_type,
            };
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Success { body },
            Err(e) => FetchOutcome::TransportFailure {
                url: url.to_string(),
                detail: e.to_string(),
            },
        }
    }
}
