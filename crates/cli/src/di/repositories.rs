use focus_guard_application::ports::{BlockedUrlRepository, SettingsRepository};
use focus_guard_domain::Config;
use focus_guard_infrastructure::repositories::TomlFileStore;
use std::sync::Arc;
use tracing::info;

pub struct Repositories {
    pub blocklist: Arc<dyn BlockedUrlRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(TomlFileStore::new(&config.store.path));
        info!(path = %config.store.path, "Using TOML store");

        Self {
            blocklist: store.clone(),
            settings: store,
        }
    }
}
