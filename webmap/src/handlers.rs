use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;
use webmap_core::crawl::{CrawlOptions, CrawlProgressCallback, execute_crawl};
use webmap_core::report::{ReportFormat, render_report, write_report};
use webmap_scanner::SiteMap;
use webmap_scanner::crawler::DEFAULT_USER_AGENT;

/// Load seed URLs from either a file or a single URL argument
pub fn load_seeds_from_source(
    url: Option<&Url>,
    seeds_file: Option<&PathBuf>,
) -> Result<Vec<String>> {
    if let Some(path) = seeds_file {
        load_seeds_from_file(path)
    } else if let Some(url) = url {
        Ok(vec![url.as_str().to_string()])
    } else {
        Err(anyhow!("Either --url or --seeds-file must be provided"))
    }
}

/// Load and parse seed URLs from a file
pub fn load_seeds_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seeds file {}", path.display()))?;

    let seeds: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_seed_line(line.trim()))
        .collect();

    if seeds.is_empty() {
        return Err(anyhow!("No valid seed URLs found in {}", path.display()));
    }

    Ok(seeds)
}

/// Parse a single line as a seed URL, trying to add http:// if needed
pub fn parse_seed_line(line: &str) -> Option<String> {
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    eprintln!(
        "{} Skipping invalid seed URL '{}'",
        "!".yellow().bold(),
        line
    );
    None
}

pub async fn handle_crawl(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<Url>("url");
    let seeds_file = sub_matches.get_one::<PathBuf>("seeds-file");
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let user_agent = sub_matches
        .get_one::<String>("user-agent")
        .cloned()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
    let output = sub_matches.get_one::<PathBuf>("output");
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);

    let seeds = load_seeds_from_source(url, seeds_file)?;

    if !quiet {
        println!("\nMapping {} site(s)", seeds.len());
        println!("Timeout: {}s per request", timeout_secs);
        println!("User-Agent: {}\n", user_agent);
    }

    let options = CrawlOptions {
        seeds,
        timeout_secs,
        user_agent,
        show_progress: !quiet,
    };

    let progress_callback: CrawlProgressCallback = Arc::new(|msg: String| {
        println!("{}", msg);
    });

    let site_maps: Vec<SiteMap> = execute_crawl(options, Some(progress_callback))
        .await
        .map_err(|e| anyhow!(e))?;

    if !quiet {
        println!("\n{} Crawl complete!\n", "✓".green().bold());
    }

    let report = render_report(&site_maps, &format).map_err(|e| anyhow!(e))?;

    match output {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.display().to_string()).into_owned();
            write_report(&report, Some(Path::new(&expanded)))
                .with_context(|| format!("Failed to write report to {}", expanded))?;
            if !quiet {
                println!(
                    "{} Report saved to {}",
                    "✓".green().bold(),
                    expanded.bright_white()
                );
            }
        }
        None => {
            write_report(&report, None).context("Failed to write report")?;
        }
    }

    Ok(())
}
