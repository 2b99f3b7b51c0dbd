pub mod handle_navigation;

pub use handle_navigation::HandleNavigationUseCase;
