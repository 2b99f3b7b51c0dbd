use async_trait::async_trait;
use focus_guard_domain::DomainError;

/// Browser-side tab control.
#[async_trait]
pub trait TabNavigator: Send + Sync {
    /// Current URL of a tab; `TabNotFound` if it was closed.
    async fn tab_url(&self, tab_id: i64) -> Result<Option<String>, DomainError>;
    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError>;
}
