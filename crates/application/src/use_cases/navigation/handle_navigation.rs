use chrono::NaiveDateTime;
use focus_guard_domain::{
    is_internal_url, DomainError, NavigationCommitted, NavigationOutcome, TabActivated,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::TabNavigator;
use crate::use_cases::EvaluateUrlUseCase;

/// Entry point for both navigation hooks.
///
/// Committed navigations and tab activations go through the same
/// evaluation and redirect path.
pub struct HandleNavigationUseCase {
    evaluate: Arc<EvaluateUrlUseCase>,
    navigator: Arc<dyn TabNavigator>,
    redirect_url: Arc<str>,
}

impl HandleNavigationUseCase {
    pub fn new(
        evaluate: Arc<EvaluateUrlUseCase>,
        navigator: Arc<dyn TabNavigator>,
        redirect_url: Arc<str>,
    ) -> Self {
        Self {
            evaluate,
            navigator,
            redirect_url,
        }
    }

    #[instrument(skip(self, event), fields(tab_id = event.tab_id))]
    pub async fn on_committed(&self, event: &NavigationCommitted) -> NavigationOutcome {
        if !event.is_main_frame() {
            return NavigationOutcome::Ignored;
        }

        self.enforce(event.tab_id, &event.url, event.timestamp.naive_local())
            .await
    }

    #[instrument(skip(self, event), fields(tab_id = event.tab_id))]
    pub async fn on_activated(&self, event: &TabActivated) -> NavigationOutcome {
        let url = match self.navigator.tab_url(event.tab_id).await {
            Ok(Some(url)) => url,
            Ok(None) => return NavigationOutcome::Ignored,
            Err(e) => {
                debug!(error = %e, "Could not check activated tab");
                return NavigationOutcome::Ignored;
            }
        };

        let outcome = self
            .enforce(event.tab_id, &url, event.timestamp.naive_local())
            .await;
        if outcome == NavigationOutcome::Allowed {
            debug!(url = %url, "Allowing URL on tab activation");
        }
        outcome
    }

    async fn enforce(&self, tab_id: i64, url: &str, now: NaiveDateTime) -> NavigationOutcome {
        if url.is_empty() || is_internal_url(url) {
            return NavigationOutcome::Ignored;
        }

        if !self.evaluate.execute(url, now).await {
            return NavigationOutcome::Allowed;
        }

        match self.navigator.redirect(tab_id, &self.redirect_url).await {
            Ok(()) => {
                info!(url = %url, tab_id = tab_id, "Blocked navigation redirected");
                NavigationOutcome::Redirected
            }
            Err(DomainError::TabNotFound(_)) => {
                debug!(tab_id = tab_id, "Tab closed before redirect");
                NavigationOutcome::RedirectFailed
            }
            Err(e) => {
                warn!(error = %e, tab_id = tab_id, "Failed to redirect blocked tab");
                NavigationOutcome::RedirectFailed
            }
        }
    }
}
