pub mod evaluate_url;

pub use evaluate_url::EvaluateUrlUseCase;
