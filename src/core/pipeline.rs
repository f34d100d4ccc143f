use crate::core::distance::calculate_distance;
use crate::core::history::RecentFiles;
use crate::core::validator::validate_input_file;
use crate::core::{
    Analysis, ConfigProvider, KeyValueStore, Pipeline, RawInput, RecentFile, Storage,
};
use crate::utils::error::Result;
use chrono::Utc;
use std::path::Path;

/// Validate `content` and compute the distance between its two columns.
pub fn analyze_content(name: &str, content: &str) -> Result<Analysis> {
    let lists = validate_input_file(content)?;
    let distance = calculate_distance(lists.list1.as_slice(), lists.list2.as_slice())?;

    Ok(Analysis {
        name: name.to_string(),
        lists,
        distance,
    })
}

pub struct AnalysisPipeline<S: Storage, K: KeyValueStore, C: ConfigProvider> {
    storage: S,
    history: RecentFiles<K>,
    config: C,
}

impl<S: Storage, K: KeyValueStore, C: ConfigProvider> AnalysisPipeline<S, K, C> {
    pub fn new(storage: S, store: K, config: C) -> Self {
        let history =
            RecentFiles::with_options(store, config.storage_key(), config.history_capacity());
        Self {
            storage,
            history,
            config,
        }
    }

    pub fn history(&self) -> &RecentFiles<K> {
        &self.history
    }
}

#[async_trait::async_trait]
impl<S: Storage, K: KeyValueStore, C: ConfigProvider> Pipeline for AnalysisPipeline<S, K, C> {
    async fn extract(&self, source: &str) -> Result<RawInput> {
        tracing::debug!("Reading input file: {}", source);
        let bytes = self.storage.read_file(source).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        let content = String::from_utf8(bytes)?;
        let name = Path::new(source)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(source)
            .to_string();

        Ok(RawInput { name, content })
    }

    async fn transform(&self, input: RawInput) -> Result<Analysis> {
        let analysis = analyze_content(&input.name, &input.content)?;
        tracing::debug!(
            "Validated {} rows, distance {}",
            analysis.lists.len(),
            analysis.distance
        );
        Ok(analysis)
    }

    async fn load(&self, analysis: Analysis) -> Result<Option<RecentFile>> {
        if !self.config.record_history() {
            tracing::debug!("History recording disabled, skipping '{}'", analysis.name);
            return Ok(None);
        }

        let entry = RecentFile {
            name: analysis.name.clone(),
            date: Utc::now(),
            stats: analysis.stats(),
        };
        self.history.record(entry.clone()).await?;
        Ok(Some(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::ValidationError;
    use crate::utils::error::AnalyzerError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AnalyzerError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    #[derive(Clone, Default)]
    struct MockStore {
        entries: Arc<Mutex<HashMap<String, String>>>,
    }

    impl KeyValueStore for MockStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().await.remove(key);
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            self.entries.lock().await.clear();
            Ok(())
        }
    }

    struct MockConfig {
        record_history: bool,
    }

    impl ConfigProvider for MockConfig {
        fn history_path(&self) -> &str {
            "unused"
        }

        fn history_capacity(&self) -> usize {
            5
        }

        fn storage_key(&self) -> &str {
            "test-history"
        }

        fn record_history(&self) -> bool {
            self.record_history
        }
    }

    type TestPipeline = AnalysisPipeline<MockStorage, MockStore, MockConfig>;

    fn pipeline(record_history: bool) -> (TestPipeline, MockStorage, MockStore) {
        let storage = MockStorage::default();
        let store = MockStore::default();
        let pipeline = AnalysisPipeline::new(
            storage.clone(),
            store.clone(),
            MockConfig { record_history },
        );
        (pipeline, storage, store)
    }

    #[test]
    fn test_analyze_content() {
        let analysis = analyze_content("a.txt", "1 4\n3 1\n2 5\n").unwrap();
        assert_eq!(analysis.distance, 4);
        assert_eq!(analysis.stats().list1_count, 3);
        assert_eq!(analysis.stats().list2_count, 3);
    }

    #[test]
    fn test_analyze_content_surfaces_validation_error() {
        let err = analyze_content("a.txt", "").unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::ValidationError(ValidationError::EmptyFile)
        ));
    }

    #[tokio::test]
    async fn test_extract_uses_file_name() {
        let (pipeline, storage, _) = pipeline(true);
        storage.put("data/input.txt", b"1 2\n3 4").await;

        let raw = pipeline.extract("data/input.txt").await.unwrap();
        assert_eq!(raw.name, "input.txt");
        assert_eq!(raw.content, "1 2\n3 4");
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let (pipeline, _, _) = pipeline(true);
        let err = pipeline.extract("missing.txt").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_rejects_binary_content() {
        let (pipeline, storage, _) = pipeline(true);
        storage.put("blob.bin", &[0xff, 0xfe, 0x00]).await;

        let err = pipeline.extract("blob.bin").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::EncodingError(_)));
    }

    #[tokio::test]
    async fn test_load_records_history() {
        let (pipeline, _, store) = pipeline(true);
        let analysis = analyze_content("a.txt", "1 2\n3 4").unwrap();

        let entry = pipeline.load(analysis).await.unwrap().unwrap();
        assert_eq!(entry.name, "a.txt");
        assert_eq!(entry.stats.distance, 2);
        assert!(store.entries.lock().await.contains_key("test-history"));
        assert_eq!(pipeline.history().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_skips_history_when_disabled() {
        let (pipeline, _, store) = pipeline(false);
        let analysis = analyze_content("a.txt", "1 2\n3 4").unwrap();

        assert!(pipeline.load(analysis).await.unwrap().is_none());
        assert!(store.entries.lock().await.is_empty());
    }
}
