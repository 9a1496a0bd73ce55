pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod map;
pub mod site;

pub use crawler::{ProgressCallback, SiteCrawler};
pub use error::CrawlError;
pub use fetch::{FetchOutcome, PageFetcher};
pub use map::{PageRecord, SiteMap};
pub use site::SiteIdentity;
