use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Invalid blocked URL: {0}")]
    InvalidBlockedUrl(String),

    #[error("Website is already in the list: {0}")]
    BlockedUrlAlreadyExists(String),

    #[error("Blocked URL not found: {0}")]
    BlockedUrlNotFound(i64),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Tab not found: {0}")]
    TabNotFound(i64),
}
