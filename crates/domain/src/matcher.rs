use std::collections::HashSet;

use crate::blocked_url::BlockedUrl;
use crate::url_pattern::WILDCARD;

/// Prefix a wildcard pattern matches against, or `None` for exact patterns.
///
/// `example.com/foo/*` -> `example.com/foo`, `*` -> `""`.
pub fn wildcard_prefix(pattern: &str) -> Option<&str> {
    let prefix = pattern.strip_suffix(WILDCARD)?;
    Some(prefix.strip_suffix('/').unwrap_or(prefix))
}

fn entry_matches(pattern: &str, normalized_url: &str) -> bool {
    match wildcard_prefix(pattern) {
        Some(prefix) => normalized_url.starts_with(prefix),
        None => pattern == normalized_url,
    }
}

/// True if any entry matches the normalized URL.
///
/// Wildcard entries use a plain string prefix test, so `example.com/foo/*`
/// also matches `example.com/foobar`.
pub fn matches(normalized_url: &str, entries: &[BlockedUrl]) -> bool {
    entries
        .iter()
        .any(|entry| entry_matches(&entry.url, normalized_url))
}

/// Blocklist snapshot partitioned once for repeated lookups.
#[derive(Debug, Clone, Default)]
pub struct UrlMatcher {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl UrlMatcher {
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a BlockedUrl>,
    {
        let mut exact = HashSet::new();
        let mut prefixes = Vec::new();

        for entry in entries {
            match wildcard_prefix(&entry.url) {
                Some(prefix) => prefixes.push(prefix.to_string()),
                None => {
                    exact.insert(entry.url.clone());
                }
            }
        }

        Self { exact, prefixes }
    }

    pub fn is_match(&self, normalized_url: &str) -> bool {
        self.exact.contains(normalized_url)
            || self
                .prefixes
                .iter()
                .any(|prefix| normalized_url.starts_with(prefix.as_str()))
    }

    pub fn exact_count(&self) -> usize {
        self.exact.len()
    }

    pub fn wildcard_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}
