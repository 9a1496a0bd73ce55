use crate::site::SiteIdentity;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Text of the first `<title>` element, or an empty string when the document
/// has none. Best-effort: the parser recovers from malformed markup, and a
/// missing or unreadable title degrades to `""` rather than failing the page.
pub fn extract_title(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>())
        .unwrap_or_default()
}

/// Every same-site link target in the document, canonicalized and
/// deduplicated. The page's own URL is excluded from its link set.
pub fn extract_links(html: &str, site: &SiteIdentity, page_url: &Url) -> BTreeSet<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut links = BTreeSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(resolved) = site.resolve(href)
            && resolved != *page_url
        {
            links.insert(resolved);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteIdentity {
        SiteIdentity::from_url(&Url::parse("http://x.test/").unwrap()).unwrap()
    }

    fn links_of(html: &str, page: &str) -> Vec<String> {
        let page_url = Url::parse(page).unwrap();
        extract_links(html, &site(), &page_url)
            .into_iter()
            .map(|url| url.to_string())
            .collect()
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("<html><title>Home</title></html>"), "Home");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_title("<html><body>no title here</body></html>"), "");
    }

    #[test]
    fn test_extract_title_takes_first() {
        let html = "<title>First</title><title>Second</title>";
        assert_eq!(extract_title(html), "First");
    }

    #[test]
    fn test_extract_links_unions_absolute_and_relative() {
        let html = r#"
            <a href="http://x.test/abs">abs</a>
            <a href="/rel">rel</a>
        "#;
        assert_eq!(
            links_of(html, "http://x.test/"),
            vec!["http://x.test/abs", "http://x.test/rel"]
        );
    }

    #[test]
    fn test_extract_links_deduplicates_fragment_variants() {
        let html = r#"
            <a href="/page#intro">a</a>
            <a href="/page#usage">b</a>
            <a href="/page">c</a>
        "#;
        assert_eq!(links_of(html, "http://x.test/"), vec!["http://x.test/page"]);
    }

    #[test]
    fn test_extract_links_excludes_self() {
        let html = r#"
            <a href="/page1">self</a>
            <a href="/page2">other</a>
        "#;
        assert_eq!(
            links_of(html, "http://x.test/page1"),
            vec!["http://x.test/page2"]
        );
    }

    #[test]
    fn test_extract_links_excludes_offsite_and_special() {
        let html = r##"
            <a href="https://elsewhere.test/page">offsite</a>
            <a href="mailto:user@x.test">mail</a>
            <a href="#top">anchor</a>
            <a href="bare/relative.html">bare</a>
            <a href="/kept">kept</a>
        "##;
        assert_eq!(links_of(html, "http://x.test/"), vec!["http://x.test/kept"]);
    }

    #[test]
    fn test_extract_links_survives_malformed_markup() {
        let html = r#"<body><a href="/ok">unclosed anchor <div><a href="/also-ok">x</body>"#;
        assert_eq!(
            links_of(html, "http://x.test/"),
            vec!["http://x.test/also-ok", "http://x.test/ok"]
        );
    }

    #[test]
    fn test_extract_links_empty_document() {
        assert!(links_of("", "http://x.test/").is_empty());
    }
}
