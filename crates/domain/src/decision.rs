use chrono::{Datelike, Timelike};

use crate::blocked_url::BlockedUrl;
use crate::matcher::matches;
use crate::schedule::Settings;
use crate::url_pattern::{normalize, NormalizeMode};

const BLANK_PAGE: &str = "about:blank";
const INTERNAL_SCHEMES: &[&str] = &["chrome://", "chrome-extension://"];

/// Browser-owned pages that are never blockable.
pub fn is_internal_url(raw_url: &str) -> bool {
    raw_url == BLANK_PAGE
        || INTERNAL_SCHEMES
            .iter()
            .any(|scheme| raw_url.starts_with(scheme))
}

/// Verdict for one navigation: `true` means redirect to the blocking page.
///
/// Pure: the caller supplies the blocklist and settings snapshot and the
/// local wall-clock time.
pub fn should_block<T: Datelike + Timelike>(
    raw_url: &str,
    entries: &[BlockedUrl],
    settings: &Settings,
    now: &T,
) -> bool {
    if is_internal_url(raw_url) {
        return false;
    }

    if !settings.is_active(now) {
        return false;
    }

    let normalized = normalize(raw_url, NormalizeMode::Url);
    matches(&normalized, entries)
}
