use crate::crawl::extract_url_path;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use webmap_scanner::SiteMap;

const DIVIDER: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Render the site maps of a crawl in the requested format.
pub fn render_report(site_maps: &[SiteMap], format: &ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(render_text(site_maps)),
        ReportFormat::Json => serde_json::to_string_pretty(site_maps)
            .map_err(|e| format!("Failed to serialize site maps: {}", e)),
        ReportFormat::Markdown => Ok(render_markdown(site_maps)),
    }
}

/// Write a rendered report to a file, or to stdout when no path is given.
pub fn write_report(report: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, report),
        None => io::stdout().write_all(report.as_bytes()),
    }
}

fn render_text(site_maps: &[SiteMap]) -> String {
    let total_pages: usize = site_maps.iter().map(|m| m.len()).sum();
    let total_links: usize = site_maps.iter().map(|m| m.total_links()).sum();
    let untitled: usize = site_maps
        .iter()
        .flat_map(|m| m.iter())
        .filter(|(_, page)| page.title.is_empty())
        .count();

    let mut report = String::new();
    report.push_str(DIVIDER);
    report.push_str("\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!(
        "  Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    report.push_str(&format!("  Sites mapped: {}\n", site_maps.len()));
    report.push_str(&format!("  Pages mapped: {}\n", total_pages));
    report.push_str(&format!("  Links recorded: {}\n", total_links));
    report.push_str(&format!("  Pages without a title: {}\n", untitled));
    report.push_str("\n");
    report.push_str(DIVIDER);
    report.push_str("\n\n");

    for map in site_maps {
        report.push_str(&format!("## {}\n", map.root));
        report.push_str(&format!("  {} pages found\n\n", map.len()));

        for (url, page) in map.iter() {
            let path = extract_url_path(url);
            let title = if page.title.is_empty() {
                "(no title)"
            } else {
                page.title.as_str()
            };
            report.push_str(&format!(
                "  {} [{} links] {}\n",
                path,
                page.links.len(),
                title
            ));
        }
        report.push('\n');
    }

    report
}

fn render_markdown(site_maps: &[SiteMap]) -> String {
    let mut report = String::new();
    report.push_str("# Site map report\n\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for map in site_maps {
        report.push_str(&format!("## {}\n\n", map.root));

        for (url, page) in map.iter() {
            let title = if page.title.is_empty() {
                "(no title)"
            } else {
                page.title.as_str()
            };
            report.push_str(&format!("- [{}]({})\n", title, url));
            for link in &page.links {
                report.push_str(&format!("  - {}\n", link));
            }
        }
        report.push('\n');
    }

    report
}
