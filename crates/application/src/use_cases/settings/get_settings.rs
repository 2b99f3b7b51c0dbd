use focus_guard_domain::{DomainError, Settings};
use std::sync::Arc;

use crate::ports::SettingsRepository;

pub struct GetSettingsUseCase {
    repo: Arc<dyn SettingsRepository>,
}

impl GetSettingsUseCase {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Settings, DomainError> {
        self.repo.get_settings().await
    }
}
