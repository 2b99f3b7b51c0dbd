use focus_guard_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockedUrlRepository;

pub struct RemoveBlockedUrlUseCase {
    repo: Arc<dyn BlockedUrlRepository>,
}

impl RemoveBlockedUrlUseCase {
    pub fn new(repo: Arc<dyn BlockedUrlRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo.remove(id).await?;
        info!(id = id, "Blocked URL removed");
        Ok(())
    }
}
