use crate::core::Pipeline;
use crate::domain::model::{Analysis, AnalysisReport};
use crate::utils::error::Result;

/// Drives a [`Pipeline`] through its extract, transform and load stages.
pub struct AnalyzerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalyzerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Analyse the file at `source`, recording it in history when enabled.
    pub async fn run(&self, source: &str) -> Result<AnalysisReport> {
        tracing::info!("Analysing {}", source);

        let raw = self.pipeline.extract(source).await?;
        tracing::debug!("Extracted {} ({} bytes)", raw.name, raw.content.len());

        let analysis = self.pipeline.transform(raw).await?;
        let mut report = report_for(&analysis);
        tracing::info!(
            "{}: {} / {} locations, distance {}",
            report.name,
            report.stats.list1_count,
            report.stats.list2_count,
            report.stats.distance
        );

        if let Some(entry) = self.pipeline.load(analysis).await? {
            tracing::debug!("Recorded {} at {}", entry.name, entry.date);
            report.recorded_at = Some(entry.date);
        }

        Ok(report)
    }
}

fn report_for(analysis: &Analysis) -> AnalysisReport {
    AnalysisReport {
        name: analysis.name.clone(),
        stats: analysis.stats(),
        recorded_at: None,
    }
}
