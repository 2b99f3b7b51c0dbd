use super::Repositories;
use crate::navigator::ConsoleNavigator;
use focus_guard_application::use_cases::{
    AddBlockedUrlUseCase, EvaluateUrlUseCase, GetBlockedUrlsUseCase, GetSettingsUseCase,
    HandleNavigationUseCase, RemoveBlockedUrlUseCase, UpdateSettingsUseCase,
};
use focus_guard_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub evaluate_url: Arc<EvaluateUrlUseCase>,
    pub handle_navigation: Arc<HandleNavigationUseCase>,
    pub add_blocked_url: Arc<AddBlockedUrlUseCase>,
    pub remove_blocked_url: Arc<RemoveBlockedUrlUseCase>,
    pub get_blocked_urls: Arc<GetBlockedUrlsUseCase>,
    pub get_settings: Arc<GetSettingsUseCase>,
    pub update_settings: Arc<UpdateSettingsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config, navigator: Arc<ConsoleNavigator>) -> Self {
        let evaluate_url = Arc::new(EvaluateUrlUseCase::new(
            repos.blocklist.clone(),
            repos.settings.clone(),
        ));

        Self {
            handle_navigation: Arc::new(HandleNavigationUseCase::new(
                evaluate_url.clone(),
                navigator,
                Arc::from(config.blocking.redirect_url.as_str()),
            )),
            evaluate_url,
            add_blocked_url: Arc::new(AddBlockedUrlUseCase::new(
                repos.blocklist.clone(),
                Arc::from(config.blocking.protected_host.as_str()),
            )),
            remove_blocked_url: Arc::new(RemoveBlockedUrlUseCase::new(repos.blocklist.clone())),
            get_blocked_urls: Arc::new(GetBlockedUrlsUseCase::new(repos.blocklist.clone())),
            get_settings: Arc::new(GetSettingsUseCase::new(repos.settings.clone())),
            update_settings: Arc::new(UpdateSettingsUseCase::new(repos.settings.clone())),
        }
    }
}
