//! Catalog search and dropdown state.
//!
//! DESIGN
//! ======
//! Results are recomputed from scratch on every input change: the catalog is
//! a dozen static entries, so there is nothing worth caching. Output order is
//! always catalog order, which makes a query's result deterministic.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::fmt;

use crate::state::catalog::{CATALOG, CatalogEntry};

/// Heading shown above the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchHeader {
    /// Empty query: the first few catalog entries.
    Popular,
    /// Non-empty query with this many matches (always >= 1).
    Found(usize),
    /// Non-empty query with no matches; carries the query as typed.
    NoResults(String),
}

impl fmt::Display for SearchHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular => f.write_str("Popular items"),
            Self::Found(1) => f.write_str("Found 1 result"),
            Self::Found(n) => write!(f, "Found {n} results"),
            Self::NoResults(query) => write!(f, "No results found for \"{query}\""),
        }
    }
}

/// Result of one search pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub entries: Vec<&'a CatalogEntry>,
    pub header: SearchHeader,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Searchable view over a slice of catalog entries.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    entries: &'a [CatalogEntry],
    popular_count: usize,
}

impl Catalog<'static> {
    /// The site's built-in catalog.
    pub fn builtin(popular_count: usize) -> Self {
        Self::new(CATALOG, popular_count)
    }
}

impl<'a> Catalog<'a> {
    pub fn new(entries: &'a [CatalogEntry], popular_count: usize) -> Self {
        Self { entries, popular_count }
    }

    /// Leading entries shown before the user types anything.
    pub fn popular(&self) -> SearchResults<'a> {
        SearchResults {
            entries: self.entries.iter().take(self.popular_count).collect(),
            header: SearchHeader::Popular,
        }
    }

    /// Case-insensitive substring search over titles and descriptions.
    pub fn search(&self, query: &str) -> SearchResults<'a> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.popular();
        }
        let entries: Vec<_> = self.entries.iter().filter(|entry| matches(entry, &needle)).collect();
        let header = if entries.is_empty() {
            SearchHeader::NoResults(query.to_owned())
        } else {
            SearchHeader::Found(entries.len())
        };
        SearchResults { entries, header }
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches(entry: &CatalogEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle) || entry.description.to_lowercase().contains(needle)
}

/// Dropdown state: visibility, current query and its results.
#[derive(Clone, Debug)]
pub struct SearchState {
    catalog: Catalog<'static>,
    open: bool,
    query: String,
    results: Option<SearchResults<'static>>,
}

impl SearchState {
    pub fn new(catalog: Catalog<'static>) -> Self {
        Self { catalog, open: false, query: String::new(), results: None }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rendered results; `None` while closed.
    pub fn results(&self) -> Option<&SearchResults<'static>> {
        self.results.as_ref()
    }

    /// Open the dropdown showing the popular items.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.results = Some(self.catalog.popular());
    }

    /// Close the dropdown and discard the query and results.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results = None;
    }

    pub fn toggle(&mut self) {
        if self.open { self.close() } else { self.open() }
    }

    /// Record a new query and recompute results.
    pub fn input(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.results = Some(self.catalog.search(query));
    }

    /// Close the dropdown and return the selected entry's URL.
    pub fn select(&mut self, entry: &CatalogEntry) -> &'static str {
        self.close();
        entry.url
    }
}
