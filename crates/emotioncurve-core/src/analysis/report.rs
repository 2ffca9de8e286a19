//! Structured pacing feedback and the schema the service must satisfy.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AnalysisFailure;

/// Result of one successful analysis.
///
/// All three fields are required on the wire; a payload missing any of
/// them is rejected rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overview of the emotional arc.
    pub summary: String,
    /// Assessment of pacing specifically.
    pub pacing_feedback: String,
    /// Improvement items, in the order the service gave them.
    pub suggestions: Vec<String>,
}

/// Structured-output schema sent with every request.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "pacingFeedback": { "type": "STRING" },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["summary", "pacingFeedback", "suggestions"]
    })
}

/// Parse the service's text payload into a report.
pub fn parse_report(payload: &str) -> Result<AnalysisReport, AnalysisFailure> {
    serde_json::from_str(payload).map_err(AnalysisFailure::MalformedPayload)
}
