//! Focus Guard Domain Layer
pub mod blocked_url;
pub mod config;
pub mod decision;
pub mod errors;
pub mod matcher;
pub mod navigation;
pub mod schedule;
pub mod url_pattern;

pub use blocked_url::BlockedUrl;
pub use config::{CliOverrides, Config, ConfigError};
pub use decision::{is_internal_url, should_block};
pub use errors::DomainError;
pub use matcher::{matches, wildcard_prefix, UrlMatcher};
pub use navigation::{NavigationCommitted, NavigationOutcome, TabActivated, MAIN_FRAME_ID};
pub use schedule::{format_minutes, is_active, parse_minutes, Settings, WorkHour};
pub use url_pattern::{normalize, NormalizeMode};
