#![allow(dead_code)]

use async_trait::async_trait;
use focus_guard_application::ports::{BlockedUrlRepository, SettingsRepository, TabNavigator};
use focus_guard_domain::{BlockedUrl, DomainError, Settings, WorkHour};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockBlockedUrlRepository {
    entries: Arc<RwLock<Vec<BlockedUrl>>>,
    unavailable: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
}

impl MockBlockedUrlRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_urls(urls: Vec<&str>) -> Self {
        let entries = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| BlockedUrl {
                id: Some(i as i64 + 1),
                url: url.to_string(),
                added_at: None,
            })
            .collect();

        Self {
            entries: Arc::new(RwLock::new(entries)),
            ..Self::new()
        }
    }

    pub fn unavailable() -> Self {
        let repo = Self::new();
        repo.set_unavailable(true);
        repo
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockBlockedUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockedUrlRepository for MockBlockedUrlRepository {
    async fn get_all(&self) -> Result<Vec<BlockedUrl>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable("pages not configured".to_string()));
        }
        Ok(self.entries.read().await.clone())
    }

    async fn add(&self, entry: &BlockedUrl) -> Result<BlockedUrl, DomainError> {
        let mut entries = self.entries.write().await;
        let next_id = entries.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1;
        let stored = BlockedUrl {
            id: Some(next_id),
            url: entry.url.clone(),
            added_at: Some("2024-06-04T12:00:00+00:00".to_string()),
        };
        entries.push(stored.clone());
        self.unavailable.store(false, Ordering::SeqCst);
        Ok(stored)
    }

    async fn remove(&self, id: i64) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != Some(id));
        if entries.len() == before {
            return Err(DomainError::BlockedUrlNotFound(id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockSettingsRepository {
    settings: Arc<RwLock<Option<Settings>>>,
}

impl MockSettingsRepository {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Some(settings))),
        }
    }

    /// 09:00-17:00, weekdays only
    pub fn office_hours() -> Self {
        Self::new(Settings {
            enabled: true,
            work_hour: WorkHour::new(540, 1020),
            block_on_weekends: false,
        })
    }

    pub fn unavailable() -> Self {
        Self {
            settings: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn current(&self) -> Option<Settings> {
        self.settings.read().await.clone()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get_settings(&self) -> Result<Settings, DomainError> {
        self.settings
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::StoreUnavailable("settings not configured".to_string()))
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockTabNavigator {
    tabs: Arc<RwLock<HashMap<i64, Option<String>>>>,
    redirects: Arc<RwLock<Vec<(i64, String)>>>,
    fail_redirects: Arc<AtomicBool>,
}

impl MockTabNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open_tab(&self, tab_id: i64, url: Option<&str>) {
        self.tabs
            .write()
            .await
            .insert(tab_id, url.map(str::to_string));
    }

    pub async fn close_tab(&self, tab_id: i64) {
        self.tabs.write().await.remove(&tab_id);
    }

    pub fn set_fail_redirects(&self, fail: bool) {
        self.fail_redirects.store(fail, Ordering::SeqCst);
    }

    pub async fn redirects(&self) -> Vec<(i64, String)> {
        self.redirects.read().await.clone()
    }
}

#[async_trait]
impl TabNavigator for MockTabNavigator {
    async fn tab_url(&self, tab_id: i64) -> Result<Option<String>, DomainError> {
        self.tabs
            .read()
            .await
            .get(&tab_id)
            .cloned()
            .ok_or(DomainError::TabNotFound(tab_id))
    }

    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError> {
        if self.fail_redirects.load(Ordering::SeqCst) {
            return Err(DomainError::StoreError("navigator offline".to_string()));
        }
        if !self.tabs.read().await.contains_key(&tab_id) {
            return Err(DomainError::TabNotFound(tab_id));
        }
        self.redirects.write().await.push((tab_id, url.to_string()));
        Ok(())
    }
}
