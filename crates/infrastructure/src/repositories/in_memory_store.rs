use arc_swap::ArcSwap;
use async_trait::async_trait;
use chrono::Utc;
use focus_guard_application::ports::{BlockedUrlRepository, SettingsRepository};
use focus_guard_domain::{BlockedUrl, DomainError, Settings};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct Snapshot {
    pages: Option<Arc<Vec<BlockedUrl>>>,
    settings: Option<Settings>,
}

/// Store kept in process memory.
///
/// Readers load the current snapshot without locking; writers build a new
/// snapshot and swap it in, so a reader always sees a complete state.
pub struct InMemoryStore {
    snapshot: ArcSwap<Snapshot>,
    write_lock: Mutex<()>,
}

impl InMemoryStore {
    pub fn new(entries: Vec<BlockedUrl>, settings: Settings) -> Self {
        Self::from_snapshot(Snapshot {
            pages: Some(Arc::new(entries)),
            settings: Some(settings),
        })
    }

    /// A store that reports `StoreUnavailable` until something is written.
    pub fn uninitialized() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(snapshot),
            write_lock: Mutex::new(()),
        }
    }

    async fn update<F, T>(&self, apply: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, DomainError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut next = Snapshot::clone(&self.snapshot.load());
        if next.settings.is_none() {
            next.settings = Some(Settings::default());
        }

        let result = apply(&mut next)?;
        self.snapshot.store(Arc::new(next));
        Ok(result)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Settings::default())
    }
}

#[async_trait]
impl BlockedUrlRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<BlockedUrl>, DomainError> {
        let snapshot = self.snapshot.load();
        snapshot
            .pages
            .as_ref()
            .map(|pages| pages.as_ref().clone())
            .ok_or_else(|| DomainError::StoreUnavailable("pages not configured".to_string()))
    }

    async fn add(&self, entry: &BlockedUrl) -> Result<BlockedUrl, DomainError> {
        self.update(|snapshot| {
            let mut pages = snapshot
                .pages
                .as_ref()
                .map(|pages| pages.as_ref().clone())
                .unwrap_or_default();

            let id = pages.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
            let stored = BlockedUrl {
                id: Some(id),
                url: entry.url.clone(),
                added_at: Some(Utc::now().to_rfc3339()),
            };
            pages.push(stored.clone());
            snapshot.pages = Some(Arc::new(pages));

            debug!(id = id, url = %stored.url, "Blocked URL stored in memory");
            Ok(stored)
        })
        .await
    }

    async fn remove(&self, id: i64) -> Result<(), DomainError> {
        self.update(|snapshot| {
            let mut pages = snapshot
                .pages
                .as_ref()
                .map(|pages| pages.as_ref().clone())
                .unwrap_or_default();

            let before = pages.len();
            pages.retain(|p| p.id != Some(id));
            if pages.len() == before {
                return Err(DomainError::BlockedUrlNotFound(id));
            }

            snapshot.pages = Some(Arc::new(pages));
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl SettingsRepository for InMemoryStore {
    async fn get_settings(&self) -> Result<Settings, DomainError> {
        self.snapshot
            .load()
            .settings
            .clone()
            .ok_or_else(|| DomainError::StoreUnavailable("settings not configured".to_string()))
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        self.update(|snapshot| {
            snapshot.settings = Some(settings.clone());
            Ok(())
        })
        .await
    }
}
