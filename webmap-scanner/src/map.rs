use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One successfully fetched page: its title and the same-site links it holds.
///
/// `title` is empty when the document has none. `links` are canonical
/// (absolute, fragment-free), same-site, and never include the page itself.
/// Records are written once and never mutated or removed within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub links: BTreeSet<String>,
}

/// The map of a crawled site: canonical page URL to its record, covering
/// exactly the pages that fetched successfully. A link whose target failed
/// to fetch stays in its referrers' link sets but never becomes a key.
///
/// Ordered containers keep serialization and reports deterministic across
/// runs of the same site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMap {
    pub root: String,
    pub pages: BTreeMap<String, PageRecord>,
}

impl SiteMap {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            pages: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, url: String, record: PageRecord) {
        self.pages.insert(url, record);
    }

    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.pages.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total outbound links across all mapped pages.
    pub fn total_links(&self) -> usize {
        self.pages.values().map(|page| page.links.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PageRecord)> {
        self.pages.iter()
    }
}
