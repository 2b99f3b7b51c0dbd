pub mod add_blocked_url;
pub mod get_blocked_urls;
pub mod remove_blocked_url;

pub use add_blocked_url::AddBlockedUrlUseCase;
pub use get_blocked_urls::GetBlockedUrlsUseCase;
pub use remove_blocked_url::RemoveBlockedUrlUseCase;
