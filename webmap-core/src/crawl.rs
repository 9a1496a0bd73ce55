use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;
use webmap_scanner::{SiteCrawler, SiteMap};

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub seeds: Vec<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub show_progress: bool,
}

/// Callback for reporting seed-level crawl milestones
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl over every seed in the options.
///
/// Each seed yields its own independent site map. A seed that cannot be
/// crawled is reported through the callback and skipped; partial progress is
/// the expected output, never a failure of the whole run.
pub async fn execute_crawl(
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<Vec<SiteMap>, String> {
    let CrawlOptions {
        seeds,
        timeout_secs,
        user_agent,
        show_progress,
    } = options;

    // Single spinner for overall crawl progress (only if enabled)
    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let processed_count = Arc::new(AtomicUsize::new(0));

    // Per-request callback for the scanner (only if progress bars enabled)
    let internal_progress_callback: webmap_scanner::ProgressCallback = if show_progress {
        let pb_clone = progress_bar.clone().unwrap();
        let count_clone = processed_count.clone();
        Arc::new(move |_request: usize, url: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            pb_clone.set_message(format!(
                "Crawling... {} pages visited ({})",
                count,
                extract_url_path(&url)
            ));
            pb_clone.tick();
        })
    } else {
        Arc::new(|_request: usize, _url: String| {})
    };

    let crawler = SiteCrawler::new()
        .with_timeout(timeout_secs)
        .with_user_agent(user_agent)
        .with_progress_callback(internal_progress_callback);

    let mut site_maps = Vec::new();
    for (idx, seed) in seeds.iter().enumerate() {
        if let Some(ref callback) = progress_callback
            && seeds.len() > 1
        {
            callback(format!(
                "Crawling site {}/{}: {}",
                idx + 1,
                seeds.len(),
                seed
            ));
        }

        match crawler.crawl(seed).await {
            Ok(map) => site_maps.push(map),
            Err(e) => {
                if let Some(ref callback) = progress_callback {
                    callback(format!("[!] Failed to crawl {}: {}", seed, e));
                }
            }
        }
    }

    if let Some(ref pb) = progress_bar {
        let total = processed_count.load(Ordering::Relaxed);
        pb.finish_with_message(format!("Crawl complete! {} pages visited", total));
    }

    Ok(site_maps)
}
