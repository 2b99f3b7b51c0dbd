//! Blocklist and settings persisted in a single TOML document.
//!
//! ```toml
//! [settings]
//! enabled = true
//! blockOnWeekends = false
//!
//! [settings.workHour]
//! start = 540
//! end = 1020
//!
//! [pages.1]
//! url = "youtube.com/*"
//! added_at = "2024-06-04T10:00:00+00:00"
//! ```
//!
//! Every read parses the file again, so each call sees one complete snapshot.

use async_trait::async_trait;
use chrono::Utc;
use focus_guard_application::ports::{BlockedUrlRepository, SettingsRepository};
use focus_guard_domain::{BlockedUrl, DomainError, Settings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<Settings>,

    #[serde(default)]
    pages: BTreeMap<String, PageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PageRecord {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    added_at: Option<String>,
}

impl StoreDocument {
    fn entries(&self) -> Vec<BlockedUrl> {
        let mut entries: Vec<BlockedUrl> = self
            .pages
            .iter()
            .map(|(id, page)| BlockedUrl {
                id: id.parse().ok(),
                url: page.url.clone(),
                added_at: page.added_at.clone(),
            })
            .collect();
        entries.sort_by_key(|entry| entry.id);
        entries
    }

    fn next_id(&self) -> i64 {
        self.pages
            .keys()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1
    }
}

pub struct TomlFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<StoreDocument>, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::StoreError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        toml::from_str(&contents).map(Some).map_err(|e| {
            DomainError::StoreError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn require_document(&self) -> Result<StoreDocument, DomainError> {
        self.read_document().await?.ok_or_else(|| {
            DomainError::StoreUnavailable(format!("{} does not exist", self.path.display()))
        })
    }

    /// Read, modify and atomically replace the document.
    async fn update<F, T>(&self, apply: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut StoreDocument) -> Result<T, DomainError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = match self.read_document().await? {
            Some(document) => document,
            None => {
                info!(path = %self.path.display(), "Initializing store");
                StoreDocument::default()
            }
        };
        if document.settings.is_none() {
            document.settings = Some(Settings::default());
        }

        let result = apply(&mut document)?;
        self.write_document(&document).await?;
        Ok(result)
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<(), DomainError> {
        let contents = toml::to_string_pretty(document)
            .map_err(|e| DomainError::StoreError(format!("Failed to serialize store: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StoreError(e.to_string()))?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp_path, contents)
            .await
            .map_err(|e| DomainError::StoreError(format!("Failed to write store: {}", e)))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| DomainError::StoreError(format!("Failed to replace store: {}", e)))?;

        debug!(path = %self.path.display(), pages = document.pages.len(), "Store written");
        Ok(())
    }
}

#[async_trait]
impl BlockedUrlRepository for TomlFileStore {
    async fn get_all(&self) -> Result<Vec<BlockedUrl>, DomainError> {
        Ok(self.require_document().await?.entries())
    }

    async fn add(&self, entry: &BlockedUrl) -> Result<BlockedUrl, DomainError> {
        let url = entry.url.clone();
        self.update(move |document| {
            let id = document.next_id();
            let added_at = Utc::now().to_rfc3339();
            document.pages.insert(
                id.to_string(),
                PageRecord {
                    url: url.clone(),
                    added_at: Some(added_at.clone()),
                },
            );
            Ok(BlockedUrl {
                id: Some(id),
                url,
                added_at: Some(added_at),
            })
        })
        .await
    }

    async fn remove(&self, id: i64) -> Result<(), DomainError> {
        self.update(move |document| {
            document
                .pages
                .remove(&id.to_string())
                .map(|_| ())
                .ok_or(DomainError::BlockedUrlNotFound(id))
        })
        .await
    }
}

#[async_trait]
impl SettingsRepository for TomlFileStore {
    async fn get_settings(&self) -> Result<Settings, DomainError> {
        self.require_document().await?.settings.ok_or_else(|| {
            DomainError::StoreUnavailable("settings not configured".to_string())
        })
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        let settings = settings.clone();
        self.update(move |document| {
            document.settings = Some(settings);
            Ok(())
        })
        .await
    }
}
