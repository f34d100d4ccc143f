use anyhow::Context;
use chronicler::config::{Command, HistoryAction};
use chronicler::core::{ConfigProvider, Pipeline};
use chronicler::utils::format::{render_history, render_report};
use chronicler::utils::{logger, validation::Validate};
use chronicler::{
    calculate_distance, parse_input_file, validate_input_file, AnalysisPipeline, AnalysisReport,
    AnalyzerEngine, AnalyzerError, CliConfig, JsonFileStore, LocalStorage, RecentFiles, Result,
    Settings, ValidationReport,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = cli.settings().context("failed to load configuration")?;

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, settings).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(command: Command, settings: Settings) -> Result<()> {
    let store = JsonFileStore::new(settings.history_path());

    match command {
        Command::Analyze { file, json, .. } => {
            let pipeline = AnalysisPipeline::new(LocalStorage::default(), store, settings);
            let engine = AnalyzerEngine::new(pipeline);
            let report = engine.run(&file).await?;
            print_report(&report, json)
        }
        Command::Validate { file, json } => {
            let pipeline = AnalysisPipeline::new(LocalStorage::default(), store, settings);
            let raw = pipeline.extract(&file).await?;
            let result = validate_input_file(&raw.content);

            if json {
                let report = ValidationReport::from(result.clone());
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            let lists = result?;
            if !json {
                println!("✅ {} is valid ({} rows)", raw.name, lists.len());
            }
            Ok(())
        }
        Command::Parse { file, json } => {
            let pipeline = AnalysisPipeline::new(LocalStorage::default(), store, settings);
            let raw = pipeline.extract(&file).await?;
            let parsed = parse_input_file(&raw.content);

            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
                return Ok(());
            }

            println!(
                "{}: {} values in list 1, {} values in list 2",
                raw.name,
                parsed.list1.len(),
                parsed.list2.len()
            );
            match calculate_distance(parsed.list1.as_slice(), parsed.list2.as_slice()) {
                Ok(distance) => println!("Distance: {}", distance),
                Err(e) => tracing::warn!("Distance not available: {}", e),
            }
            Ok(())
        }
        Command::History { action } => {
            let history =
                RecentFiles::with_options(store, settings.storage_key(), settings.history_capacity());
            run_history(action, &history).await
        }
    }
}

async fn run_history(action: HistoryAction, history: &RecentFiles<JsonFileStore>) -> Result<()> {
    match action {
        HistoryAction::List { json } => {
            let files = history.list().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                println!("{}", render_history(&files));
            }
        }
        HistoryAction::Show { name, json } => {
            let file = history
                .find(&name)
                .await?
                .ok_or_else(|| AnalyzerError::HistoryError {
                    message: format!("no entry named '{}'", name),
                })?;
            print_report(&AnalysisReport::from(&file), json)?;
        }
        HistoryAction::Remove { name } => {
            let remaining = history.remove(&name).await?;
            println!("🗑️  Removed {} ({} files left)", name, remaining.len());
        }
        HistoryAction::Clear => {
            history.clear().await?;
            println!("🧹 History cleared");
        }
    }
    Ok(())
}

fn print_report(report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}
