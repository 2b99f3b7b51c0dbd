use focus_guard_domain::{DomainError, Settings};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SettingsRepository;

pub struct UpdateSettingsUseCase {
    repo: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsUseCase {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, settings: Settings) -> Result<Settings, DomainError> {
        settings.work_hour.validate()?;
        self.repo.save_settings(&settings).await?;

        info!(
            enabled = settings.enabled,
            work_hour = %settings.work_hour,
            block_on_weekends = settings.block_on_weekends,
            "Settings updated"
        );

        Ok(settings)
    }
}
