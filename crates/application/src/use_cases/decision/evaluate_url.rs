use chrono::NaiveDateTime;
use focus_guard_domain::{is_internal_url, should_block};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{BlockedUrlRepository, SettingsRepository};

/// Reads one blocklist/settings snapshot and returns the verdict.
///
/// Fails open: if either read fails the URL is allowed.
pub struct EvaluateUrlUseCase {
    blocklist: Arc<dyn BlockedUrlRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl EvaluateUrlUseCase {
    pub fn new(
        blocklist: Arc<dyn BlockedUrlRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            blocklist,
            settings,
        }
    }

    /// `now` is local wall-clock time.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw_url: &str, now: NaiveDateTime) -> bool {
        if is_internal_url(raw_url) {
            return false;
        }

        let (entries, settings) =
            tokio::join!(self.blocklist.get_all(), self.settings.get_settings());

        let entries = match entries {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Blocklist unavailable, allowing navigation");
                return false;
            }
        };

        let settings = match settings {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Settings unavailable, allowing navigation");
                return false;
            }
        };

        let verdict = should_block(raw_url, &entries, &settings, &now);

        debug!(
            verdict = verdict,
            entries = entries.len(),
            enabled = settings.enabled,
            "URL evaluated"
        );

        verdict
    }
}
