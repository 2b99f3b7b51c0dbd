mod blocked_url_repository;
mod settings_repository;
mod tab_navigator;

pub use blocked_url_repository::BlockedUrlRepository;
pub use settings_repository::SettingsRepository;
pub use tab_navigator::TabNavigator;
