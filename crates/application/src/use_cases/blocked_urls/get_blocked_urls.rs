use focus_guard_domain::{BlockedUrl, DomainError};
use std::sync::Arc;

use crate::ports::BlockedUrlRepository;

pub struct GetBlockedUrlsUseCase {
    repo: Arc<dyn BlockedUrlRepository>,
}

impl GetBlockedUrlsUseCase {
    pub fn new(repo: Arc<dyn BlockedUrlRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<BlockedUrl>, DomainError> {
        self.repo.get_all().await
    }
}
