pub mod crawl;
pub mod report;

pub use crawl::{CrawlOptions, CrawlProgressCallback, execute_crawl, extract_url_path};
pub use report::{ReportFormat, render_report, write_report};

use colored::Colorize;

pub fn print_banner() {
    let banner = r"
__      _____| |__  _ __ ___   __ _ _ __
\ \ /\ / / _ \ '_ \| '_ ` _ \ / _` | '_ \
 \ V  V /  __/ |_) | | | | | | (_| | |_) |
  \_/\_/ \___|_.__/|_| |_| |_|\__,_| .__/
                                   |_|";
    println!("{}", banner.bright_blue().bold());
    println!(
        "{}",
        format!("  v{} - map a site, page by page", env!("CARGO_PKG_VERSION")).bright_white()
    );
    println!();
}
