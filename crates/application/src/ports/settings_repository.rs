use async_trait::async_trait;
use focus_guard_domain::{DomainError, Settings};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_settings(&self) -> Result<Settings, DomainError>;
    async fn save_settings(&self, settings: &Settings) -> Result<(), DomainError>;
}
