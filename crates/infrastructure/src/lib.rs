//! Focus Guard Infrastructure Layer
pub mod repositories;
