use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a raw URL is turned into a blocklist pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMode {
    /// Canonical comparable form of a navigated URL, no wildcard.
    #[default]
    Url,
    /// Host only, as a wildcard pattern (`example.com/*`).
    Domain,
    /// Full path as a wildcard pattern (`example.com/docs/*`).
    StartsWith,
}

impl NormalizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizeMode::Url => "url",
            NormalizeMode::Domain => "domain",
            NormalizeMode::StartsWith => "starts-with",
        }
    }
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(NormalizeMode::Url),
            "domain" => Ok(NormalizeMode::Domain),
            "starts-with" => Ok(NormalizeMode::StartsWith),
            other => Err(format!(
                "Invalid normalize mode '{}' (expected url, domain or starts-with)",
                other
            )),
        }
    }
}

pub const WILDCARD: char = '*';

/// Canonicalize a raw URL.
///
/// Lower-cases, then strips a leading `https://`, `http://` and `www.`
/// (each at most once, in that order) and the query string. `Domain`
/// keeps only the host and `StartsWith` keeps the path; both end in `/*`.
/// A single trailing `/` is dropped from the result.
///
/// ```
/// use focus_guard_domain::{normalize, NormalizeMode};
///
/// assert_eq!(normalize("HTTPS://WWW.Example.com/Foo/?x=1", NormalizeMode::Url), "example.com/foo");
/// assert_eq!(normalize("https://example.com/foo", NormalizeMode::Domain), "example.com/*");
/// assert_eq!(normalize("example.com/foo", NormalizeMode::StartsWith), "example.com/foo/*");
/// ```
pub fn normalize(raw: &str, mode: NormalizeMode) -> String {
    let lowered = raw.to_lowercase();

    let mut url = lowered.as_str();
    url = url.strip_prefix("https://").unwrap_or(url);
    url = url.strip_prefix("http://").unwrap_or(url);
    url = url.strip_prefix("www.").unwrap_or(url);
    url = url.split_once('?').map_or(url, |(path, _)| path);

    let mut normalized = match mode {
        NormalizeMode::Url => url.to_string(),
        NormalizeMode::Domain => {
            let host = url.split_once('/').map_or(url, |(host, _)| host);
            format!("{}/{}", host, WILDCARD)
        }
        NormalizeMode::StartsWith => {
            let mut pattern = String::with_capacity(url.len() + 2);
            pattern.push_str(url);
            if !pattern.ends_with('/') {
                pattern.push('/');
            }
            pattern.push(WILDCARD);
            pattern
        }
    };

    if normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
