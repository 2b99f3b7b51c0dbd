use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::url_pattern::WILDCARD;

const URL_ALLOWED_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789-./";

/// One blocklist entry.
///
/// `url` is stored already normalized: lowercase, no scheme, no `www.`,
/// no query string. A trailing `*` makes it a prefix pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl BlockedUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            added_at: None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.url.ends_with(WILDCARD)
    }

    /// Check a normalized candidate before it is stored.
    ///
    /// Wildcard candidates skip the character check.
    pub fn validate(
        candidate: &str,
        existing: &[BlockedUrl],
        protected_host: &str,
    ) -> Result<(), DomainError> {
        if candidate.is_empty() {
            return Err(DomainError::InvalidBlockedUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        let has_invalid_chars = candidate.chars().any(|c| !URL_ALLOWED_CHARS.contains(c));
        if has_invalid_chars && !candidate.ends_with(WILDCARD) {
            return Err(DomainError::InvalidBlockedUrl(
                "Invalid characters in URL".to_string(),
            ));
        }

        if !protected_host.is_empty() && candidate.starts_with(protected_host) {
            return Err(DomainError::InvalidBlockedUrl(
                "You can't block the website blocker".to_string(),
            ));
        }

        if existing.iter().any(|entry| entry.url == candidate) {
            return Err(DomainError::BlockedUrlAlreadyExists(candidate.to_string()));
        }

        Ok(())
    }
}
