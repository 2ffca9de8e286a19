//! Pacing analysis command.

use std::path::PathBuf;

use emotioncurve_core::analysis::MIN_BEATS_FOR_ANALYSIS;
use emotioncurve_core::storage::data_dir;
use emotioncurve_core::{AnalysisClient, AnalysisReport, CurveError, GeminiGenerator};

use super::WorkingCurve;

const LAST_REPORT_FILE: &str = "last_analysis.json";

pub fn run(json: bool, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let curve = WorkingCurve::open(file)?;

    if curve.store.len() < MIN_BEATS_FOR_ANALYSIS {
        return Err(CurveError::PreconditionNotMet {
            required: MIN_BEATS_FOR_ANALYSIS,
            actual: curve.store.len(),
        }
        .into());
    }

    let generator = GeminiGenerator::from_settings(&curve.config.analysis)?;
    let client = AnalysisClient::new(generator);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(client.analyze(curve.store.list()))?;

    // Only a successful call replaces the stored report.
    let report_path = data_dir()?.join(LAST_REPORT_FILE);
    std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    tracing::debug!(path = %report_path.display(), "saved analysis report");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, client.generator().model()));
    }
    Ok(())
}

fn render_report(report: &AnalysisReport, model: &str) -> String {
    let mut output = format!("\nDesigner Feedback ({model})\n");
    output.push_str(&"=".repeat(50));
    output.push_str("\n\nOverall Summary\n");
    output.push_str(&format!("  {}\n", report.summary));
    output.push_str("\nPacing & Flow\n");
    output.push_str(&format!("  {}\n", report.pacing_feedback));
    output.push_str("\nImprovement Suggestions\n");
    if report.suggestions.is_empty() {
        output.push_str("  (none)\n");
    }
    for (i, suggestion) in report.suggestions.iter().enumerate() {
        output.push_str(&format!("  #{} {}\n", i + 1, suggestion));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_numbered_in_order() {
        let report = AnalysisReport {
            summary: "Rising action works".into(),
            pacing_feedback: "Middle sags".into(),
            suggestions: vec!["Add a twist".into(), "Trim the tutorial".into()],
        };
        let text = render_report(&report, "gemini-test");
        assert!(text.contains("Designer Feedback (gemini-test)"));
        let first = text.find("#1 Add a twist").unwrap();
        let second = text.find("#2 Trim the tutorial").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_suggestions_render_placeholder() {
        let report = AnalysisReport {
            summary: "s".into(),
            pacing_feedback: "p".into(),
            suggestions: Vec::new(),
        };
        assert!(render_report(&report, "m").contains("(none)"));
    }
}
