// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_seeds_from_file, load_seeds_from_source, parse_seed_line};

// Re-export crawl and report functionality from webmap-core
pub use webmap_core::crawl::{CrawlOptions, CrawlProgressCallback, execute_crawl, extract_url_path};
pub use webmap_core::report::{ReportFormat, render_report, write_report};
