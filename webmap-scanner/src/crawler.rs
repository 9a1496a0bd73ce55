use crate::error::{CrawlError, Result};
use crate::extract::{extract_links, extract_title};
use crate::fetch::{FetchOutcome, PageFetcher};
use crate::map::{PageRecord, SiteMap};
use crate::site::SiteIdentity;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Invoked once per fetched URL with the request ordinal and the URL.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

pub const DEFAULT_USER_AGENT: &str = "webmap/0.1 (https://github.com/trapdoorsec/webmap)";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Sequential breadth-first crawler confined to a single site.
///
/// One page is fetched and processed at a time; all crawl state (frontier,
/// seen set, accumulating map) is owned by a single `crawl` invocation.
pub struct SiteCrawler {
    timeout_secs: u64,
    user_agent: String,
    progress_callback: Option<ProgressCallback>,
}

impl SiteCrawler {
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            progress_callback: None,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Maps the site the seed belongs to, starting from its root.
    ///
    /// Page-level failures (non-2xx, transport errors, non-HTML responses)
    /// are reported and skipped; the returned map holds exactly the pages
    /// that fetched successfully. An unreachable root therefore yields an
    /// empty map, not an error.
    pub async fn crawl(&self, seed: &str) -> Result<SiteMap> {
        let seed_url =
            Url::parse(seed).map_err(|e| CrawlError::InvalidSeed(format!("{seed}: {e}")))?;
        let site = SiteIdentity::from_url(&seed_url)?;
        let root_url = site.root_url();

        info!("Starting crawl of {}", root_url);

        let fetcher = PageFetcher::new(self.timeout_secs, &self.user_agent)?;
        let mut site_map = SiteMap::new(root_url.to_string());

        // Queued-or-visited URLs, checked before every enqueue: each
        // distinct URL enters the frontier at most once, so each is fetched
        // at most once and the crawl terminates on any finite link graph.
        let mut seen: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<Url> = VecDeque::new();

        seen.insert(root_url.to_string());
        frontier.push_back(root_url);

        let mut request_count = 0usize;
        while let Some(page_url) = frontier.pop_front() {
            request_count += 1;
            if request_count % 10 == 0 {
                info!("Sending request #{}", request_count);
            }
            if let Some(ref callback) = self.progress_callback {
                callback(request_count, page_url.to_string());
            }

            let body = match fetcher.fetch(&page_url).await {
                FetchOutcome::Success { body } => body,
                FetchOutcome::HttpFailure { url, status } => {
                    warn!("Unsuccessful request to {}: HTTP {}", url, status);
                    continue;
                }
                FetchOutcome::TransportFailure { url, detail } => {
                    warn!("Unsuccessful request to {}: {}", url, detail);
                    continue;
                }
                FetchOutcome::WrongContentType { url, .. } => {
                    warn!("Resource at {} is not an html document", url);
                    continue;
                }
            };

            let title = extract_title(&body);
            let links = extract_links(&body, &site, &page_url);

            let record = PageRecord {
                title,
                links: links.iter().map(Url::to_string).collect(),
            };

            for link in links {
                if seen.insert(link.to_string()) {
                    frontier.push_back(link);
                }
            }

            site_map.insert(page_url.to_string(), record);
        }

        info!(
            "Crawl of {} complete: {} pages mapped, {} requests sent",
            site_map.root,
            site_map.len(),
            request_count
        );
        Ok(site_map)
    }
}

impl Default for SiteCrawler {
    fn default() -> Self {
        Self::new()
    }
}
