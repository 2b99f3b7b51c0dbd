use focus_guard_domain::{normalize, BlockedUrl, DomainError, NormalizeMode};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockedUrlRepository;

pub struct AddBlockedUrlUseCase {
    repo: Arc<dyn BlockedUrlRepository>,
    protected_host: Arc<str>,
}

impl AddBlockedUrlUseCase {
    pub fn new(repo: Arc<dyn BlockedUrlRepository>, protected_host: Arc<str>) -> Self {
        Self {
            repo,
            protected_host,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        raw_url: &str,
        mode: NormalizeMode,
    ) -> Result<BlockedUrl, DomainError> {
        let pattern = normalize(raw_url, mode);

        // An uninitialized store has no entries yet; the first add creates it
        let existing = match self.repo.get_all().await {
            Ok(entries) => entries,
            Err(DomainError::StoreUnavailable(_)) => Vec::new(),
            Err(e) => return Err(e),
        };

        BlockedUrl::validate(&pattern, &existing, &self.protected_host)?;

        let entry = self.repo.add(&BlockedUrl::new(pattern)).await?;

        info!(
            id = ?entry.id,
            url = %entry.url,
            mode = %mode,
            "Blocked URL added"
        );

        Ok(entry)
    }
}
