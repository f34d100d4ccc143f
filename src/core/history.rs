//! Recent-file history kept in a [`KeyValueStore`].
//!
//! The whole history is stored as one JSON array under a single key, most
//! recent entry first. Recording a file whose name is already present
//! replaces the older entry, and the list never grows past its capacity.

use crate::domain::model::RecentFile;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{AnalyzerError, Result};

pub const DEFAULT_STORAGE_KEY: &str = "chroniclerRecentFiles";
pub const DEFAULT_CAPACITY: usize = 5;

pub struct RecentFiles<K: KeyValueStore> {
    store: K,
    key: String,
    capacity: usize,
}

impl<K: KeyValueStore> RecentFiles<K> {
    pub fn new(store: K) -> Self {
        Self::with_options(store, DEFAULT_STORAGE_KEY, DEFAULT_CAPACITY)
    }

    pub fn with_options(store: K, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries, most recent first.
    ///
    /// A stored value that is not a JSON array is logged and treated as
    /// empty. Inside an array, entries that do not decode are logged and
    /// skipped one by one, so the readable ones survive the next write.
    pub async fn list(&self) -> Result<Vec<RecentFile>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(Vec::new());
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable history under '{}': {}", self.key, e);
                return Ok(Vec::new());
            }
        };

        let files = entries
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, entry)| match serde_json::from_value::<RecentFile>(entry) {
                    Ok(file) => Some(file),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping unreadable history entry {} under '{}': {}",
                            index,
                            self.key,
                            e
                        );
                        None
                    }
                },
            )
            .collect();
        Ok(files)
    }

    pub async fn find(&self, name: &str) -> Result<Option<RecentFile>> {
        let files = self.list().await?;
        Ok(files.into_iter().find(|file| file.name == name))
    }

    /// Put `file` at the front, dropping any older entry with the same name
    /// and anything beyond capacity. Returns the updated history.
    pub async fn record(&self, file: RecentFile) -> Result<Vec<RecentFile>> {
        let existing = self.list().await?;

        let mut updated = Vec::with_capacity(self.capacity);
        updated.extend(
            existing
                .into_iter()
                .filter(|entry| entry.name != file.name)
                .take(self.capacity - 1),
        );
        updated.insert(0, file);

        tracing::debug!(
            "Recording '{}' in history ({} entries)",
            updated[0].name,
            updated.len()
        );
        self.save(&updated).await?;
        Ok(updated)
    }

    /// Remove the entry named `name`. Fails with a history error when no
    /// such entry exists.
    pub async fn remove(&self, name: &str) -> Result<Vec<RecentFile>> {
        let mut files = self.list().await?;
        let before = files.len();
        files.retain(|file| file.name != name);

        if files.len() == before {
            return Err(AnalyzerError::HistoryError {
                message: format!("no entry named '{}'", name),
            });
        }

        if files.is_empty() {
            self.store.remove(&self.key).await?;
        } else {
            self.save(&files).await?;
        }
        Ok(files)
    }

    /// Wipe the backing store, including any unreadable content.
    pub async fn clear(&self) -> Result<()> {
        tracing::debug!("Clearing history store");
        self.store.clear().await
    }

    async fn save(&self, files: &[RecentFile]) -> Result<()> {
        let json = serde_json::to_string(files)?;
        self.store.set(&self.key, &json).await
    }
}
