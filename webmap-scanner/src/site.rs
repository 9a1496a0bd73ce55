use crate::error::{CrawlError, Result};
use url::Url;

/// The site a crawl is confined to: scheme, host, and port of the seed URL.
///
/// Membership is exact. A URL belongs to the site only if all three parts
/// match; `url` already folds default ports to `None`, so `http://x.test:80`
/// and `http://x.test` compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    scheme: String,
    host: String,
    port: Option<u16>,
    root: Url,
}

impl SiteIdentity {
    /// Derives the identity of the site a URL belongs to.
    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| CrawlError::InvalidSeed(format!("URL has no host: {url}")))?
            .to_string();

        let mut root = url.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port(),
            root,
        })
    }

    /// Canonical URL of the site root.
    pub fn root_url(&self) -> Url {
        self.root.clone()
    }

    /// Whether a URL lives on this site.
    pub fn owns(&self, url: &Url) -> bool {
        url.scheme() == self.scheme
            && url.host_str() == Some(self.host.as_str())
            && url.port() == self.port
    }

    /// Resolves a raw href into a canonical same-site URL.
    ///
    /// Two forms are recognized: absolute URLs on this site, and
    /// root-relative paths starting with `/` (joined against the root).
    /// Everything else is dropped: empty hrefs, bare anchors, `javascript:`,
    /// `mailto:`, `tel:`, protocol-relative `//...`, and relative paths
    /// without a leading slash. The last of these is a known limitation
    /// rather than an oversight; such links are not resolved against the
    /// containing page.
    ///
    /// Resolved URLs have their fragment removed: two URLs differing only by
    /// fragment name the same page.
    pub fn resolve(&self, href: &str) -> Option<Url> {
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("javascript:")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("//")
        {
            return None;
        }

        let mut resolved = if href.starts_with('/') {
            self.root.join(href).ok()?
        } else {
            let url = Url::parse(href).ok()?;
            if !self.owns(&url) {
                return None;
            }
            url
        };

        resolved.set_fragment(None);
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(url: &str) -> SiteIdentity {
        SiteIdentity::from_url(&Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_root_url_drops_path_query_fragment() {
        let site = identity("https://example.com/docs/intro?page=2#install");
        assert_eq!(site.root_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_from_url_rejects_hostless_url() {
        let url = Url::parse("mailto:user@example.com").unwrap();
        assert!(matches!(
            SiteIdentity::from_url(&url),
            Err(CrawlError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_resolve_root_relative() {
        let site = identity("https://example.com/somewhere");
        let resolved = site.resolve("/docs").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_absolute_same_site() {
        let site = identity("https://example.com/");
        let resolved = site.resolve("https://example.com/about").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_resolve_strips_fragment() {
        let site = identity("https://example.com/");
        let resolved = site.resolve("/docs#install").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs");

        let resolved = site.resolve("https://example.com/docs#usage").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_rejects_other_host() {
        let site = identity("https://example.com/");
        assert_eq!(site.resolve("https://other.com/docs"), None);
    }

    #[test]
    fn test_resolve_rejects_other_scheme() {
        let site = identity("http://example.com/");
        assert_eq!(site.resolve("https://example.com/docs"), None);
    }

    #[test]
    fn test_resolve_rejects_special_hrefs() {
        let site = identity("https://example.com/");
        assert_eq!(site.resolve(""), None);
        assert_eq!(site.resolve("#section"), None);
        assert_eq!(site.resolve("javascript:void(0)"), None);
        assert_eq!(site.resolve("mailto:user@example.com"), None);
        assert_eq!(site.resolve("tel:+15551234567"), None);
    }

    #[test]
    fn test_resolve_rejects_protocol_relative() {
        let site = identity("https://example.com/");
        assert_eq!(site.resolve("//example.com/docs"), None);
    }

    #[test]
    fn test_resolve_rejects_bare_relative() {
        let site = identity("https://example.com/");
        assert_eq!(site.resolve("docs/intro.html"), None);
    }

    #[test]
    fn test_owns_is_port_sensitive() {
        let site = identity("http://127.0.0.1:8080/");
        assert!(site.owns(&Url::parse("http://127.0.0.1:8080/page").unwrap()));
        assert!(!site.owns(&Url::parse("http://127.0.0.1:9090/page").unwrap()));
    }

    #[test]
    fn test_owns_folds_default_port() {
        let site = identity("http://example.com:80/");
        assert!(site.owns(&Url::parse("http://example.com/page").unwrap()));
    }
}
