pub mod blocked_urls;
pub mod decision;
pub mod navigation;
pub mod settings;

pub use blocked_urls::{AddBlockedUrlUseCase, GetBlockedUrlsUseCase, RemoveBlockedUrlUseCase};
pub use decision::EvaluateUrlUseCase;
pub use navigation::HandleNavigationUseCase;
pub use settings::{GetSettingsUseCase, UpdateSettingsUseCase};
