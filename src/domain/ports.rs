use crate::domain::model::{Analysis, RawInput, RecentFile};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of raw input files.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// String key-value storage backing the recent-file history.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn history_path(&self) -> &str;
    fn history_capacity(&self) -> usize;
    fn storage_key(&self) -> &str;
    fn record_history(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, source: &str) -> Result<RawInput>;
    async fn transform(&self, input: RawInput) -> Result<Analysis>;
    async fn load(&self, analysis: Analysis) -> Result<Option<RecentFile>>;
}
