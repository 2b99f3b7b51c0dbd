pub mod get_settings;
pub mod update_settings;

pub use get_settings::GetSettingsUseCase;
pub use update_settings::UpdateSettingsUseCase;
