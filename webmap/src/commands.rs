use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;
use webmap_scanner::crawler::DEFAULT_USER_AGENT;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("webmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("webmap")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Map a site: breadth-first crawl from a seed URL, recording every reachable \
                page's title and same-site links.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Seed URL of the site to map")
                        .value_parser(clap::value_parser!(Url))
                        .conflicts_with("seeds-file"),
                )
                .arg(
                    arg!(-S --"seeds-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of seed URLs, one site map per seed")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("url"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"user-agent" <UA>)
                        .required(false)
                        .help("User-Agent header sent with every request")
                        .default_value(DEFAULT_USER_AGENT),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown"])
                        .default_value("text"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tree_is_well_formed() {
        command_argument_builder().debug_assert();
    }

    #[test]
    fn test_crawl_defaults() {
        let matches = command_argument_builder()
            .get_matches_from(["webmap", "crawl", "-u", "http://x.test/"]);
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "crawl");
        assert_eq!(*sub.get_one::<u64>("timeout").unwrap(), 10);
        assert_eq!(sub.get_one::<String>("format").unwrap(), "text");
        assert_eq!(
            sub.get_one::<Url>("url").unwrap().as_str(),
            "http://x.test/"
        );
    }
}
