use anyhow::Result;
use chronicler::core::Pipeline;
use chronicler::{
    AnalysisPipeline, AnalyzerEngine, AnalyzerError, JsonFileStore, LocalStorage, RecentFiles,
    Settings, ValidationError,
};
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

fn settings_in(dir: &Path) -> Settings {
    Settings {
        history_path: dir.join("history.json").to_str().unwrap().to_string(),
        ..Settings::default()
    }
}

fn engine_in(
    dir: &Path,
    settings: Settings,
) -> AnalyzerEngine<AnalysisPipeline<LocalStorage, JsonFileStore, Settings>> {
    let storage = LocalStorage::new(dir.to_str().unwrap().to_string());
    let store = JsonFileStore::new(settings.history_path.clone());
    AnalyzerEngine::new(AnalysisPipeline::new(storage, store, settings))
}

#[tokio::test]
async fn test_end_to_end_analysis_records_history() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("input.txt"), SAMPLE)?;

    let engine = engine_in(temp_dir.path(), settings_in(temp_dir.path()));
    let report = engine.run("input.txt").await?;

    assert_eq!(report.name, "input.txt");
    assert_eq!(report.stats.list1_count, 6);
    assert_eq!(report.stats.list2_count, 6);
    assert_eq!(report.stats.distance, 11);
    assert!(report.recorded_at.is_some());

    // history lives in a JSON file holding the browser-compatible array
    let raw = std::fs::read_to_string(temp_dir.path().join("history.json"))?;
    let store: serde_json::Value = serde_json::from_str(&raw)?;
    let history: serde_json::Value =
        serde_json::from_str(store["chroniclerRecentFiles"].as_str().unwrap())?;
    assert_eq!(history[0]["name"], "input.txt");
    assert_eq!(history[0]["stats"]["distance"], 11);
    assert_eq!(history[0]["stats"]["list1Count"], 6);

    Ok(())
}

#[tokio::test]
async fn test_invalid_file_is_not_recorded() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("bad.txt"), "1 2\n3 4 5\n")?;

    let settings = settings_in(temp_dir.path());
    let engine = engine_in(temp_dir.path(), settings.clone());
    let err = engine.run("bad.txt").await.unwrap_err();

    match err {
        AnalyzerError::ValidationError(e) => {
            assert_eq!(e, ValidationError::MalformedLine { line: 2 });
            assert_eq!(
                e.to_string(),
                "Invalid format on line 2: Expected 2 numbers separated by whitespace"
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!Path::new(&settings.history_path).exists());

    Ok(())
}

#[tokio::test]
async fn test_reanalysis_replaces_entry_and_capacity_applies() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for i in 0..6 {
        let content = format!("{} 0\n0 {}\n", i, i);
        std::fs::write(temp_dir.path().join(format!("f{}.txt", i)), content)?;
    }

    let settings = settings_in(temp_dir.path());
    let engine = engine_in(temp_dir.path(), settings.clone());
    for i in 0..6 {
        engine.run(&format!("f{}.txt", i)).await?;
    }
    engine.run("f3.txt").await?;

    let history = RecentFiles::new(JsonFileStore::new(settings.history_path.clone()));
    let names: Vec<String> = history.list().await?.into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["f3.txt", "f5.txt", "f4.txt", "f2.txt", "f1.txt"]);

    Ok(())
}

#[tokio::test]
async fn test_no_history_setting() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("input.txt"), SAMPLE)?;

    let settings = Settings {
        record_history: false,
        ..settings_in(temp_dir.path())
    };
    let engine = engine_in(temp_dir.path(), settings.clone());
    let report = engine.run("input.txt").await?;

    assert_eq!(report.stats.distance, 11);
    assert!(report.recorded_at.is_none());
    assert!(!Path::new(&settings.history_path).exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = engine_in(temp_dir.path(), settings_in(temp_dir.path()));

    let err = engine.run("nope.txt").await.unwrap_err();
    assert!(matches!(err, AnalyzerError::IoError(_)));
    assert_eq!(err.user_friendly_message(), "The input file could not be found");

    Ok(())
}

#[tokio::test]
async fn test_extract_keeps_content_for_lenient_parsing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("mixed.txt"), "1 2\nx 4\n5\n")?;

    let engine = engine_in(temp_dir.path(), settings_in(temp_dir.path()));
    let raw = engine.pipeline().extract("mixed.txt").await?;
    let parsed = chronicler::parse_input_file(&raw.content);

    assert_eq!(parsed.list1, vec![1.0, 5.0]);
    assert_eq!(parsed.list2, vec![2.0, 4.0]);

    Ok(())
}
