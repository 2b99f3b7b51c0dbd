use async_trait::async_trait;
use focus_guard_domain::{BlockedUrl, DomainError};

#[async_trait]
pub trait BlockedUrlRepository: Send + Sync {
    /// `StoreUnavailable` if the store was never initialized.
    async fn get_all(&self) -> Result<Vec<BlockedUrl>, DomainError>;
    /// Stores the entry and returns it with `id` and `added_at` filled in.
    async fn add(&self, entry: &BlockedUrl) -> Result<BlockedUrl, DomainError>;
    async fn remove(&self, id: i64) -> Result<(), DomainError>;
}
