use async_trait::async_trait;
use focus_guard_application::ports::TabNavigator;
use focus_guard_domain::DomainError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Tab navigator for simulated navigations: tabs live in memory and
/// redirects are printed to stdout.
#[derive(Default)]
pub struct ConsoleNavigator {
    tabs: Mutex<HashMap<i64, String>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_tab(&self, tab_id: i64, url: &str) {
        if let Ok(mut tabs) = self.tabs.lock() {
            tabs.insert(tab_id, url.to_string());
        }
    }
}

#[async_trait]
impl TabNavigator for ConsoleNavigator {
    async fn tab_url(&self, tab_id: i64) -> Result<Option<String>, DomainError> {
        let tabs = self
            .tabs
            .lock()
            .map_err(|_| DomainError::TabNotFound(tab_id))?;
        tabs.get(&tab_id)
            .cloned()
            .map(Some)
            .ok_or(DomainError::TabNotFound(tab_id))
    }

    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError> {
        {
            let mut tabs = self
                .tabs
                .lock()
                .map_err(|_| DomainError::TabNotFound(tab_id))?;
            let tab = tabs.get_mut(&tab_id).ok_or(DomainError::TabNotFound(tab_id))?;
            *tab = url.to_string();
        }
        println!("tab {} -> {}", tab_id, url);
        Ok(())
    }
}
