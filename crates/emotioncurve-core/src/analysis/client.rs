//! Turns a curve snapshot into one analysis request.

use std::future::Future;

use super::prompt::render_prompt;
use super::report::{parse_report, response_schema, AnalysisReport};
use super::traits::{ContentGenerator, GenerationRequest};
use crate::curve::EmotionPoint;
use crate::error::{CurveError, Result};

/// A curve needs at least this many beats before pacing can be judged.
pub const MIN_BEATS_FOR_ANALYSIS: usize = 2;

/// Analysis front-end over a text-generation backend.
///
/// The client keeps no state between calls: nothing is cached and nothing
/// is retried.
pub struct AnalysisClient<G> {
    generator: G,
}

impl<G: ContentGenerator> AnalysisClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Analyze the given beats.
    ///
    /// The request is built from `snapshot` before this returns, so the
    /// future does not borrow it: the caller may keep editing the curve while
    /// the call is in flight and the report describes the beats as they were
    /// at invocation.
    pub fn analyze(
        &self,
        snapshot: &[EmotionPoint],
    ) -> impl Future<Output = Result<AnalysisReport>> + Send + '_ {
        let prepared = build_request(snapshot);
        let beats = snapshot.len();

        async move {
            let request = prepared?;
            tracing::info!(beats, backend = self.generator.name(), "starting pacing analysis");

            let payload = self.generator.generate(&request).await.map_err(|e| {
                tracing::warn!(error = %e, "pacing analysis request failed");
                CurveError::from(e)
            })?;

            let report = parse_report(&payload).map_err(|e| {
                tracing::warn!(error = %e, "pacing analysis returned an unusable payload");
                CurveError::from(e)
            })?;

            tracing::info!(suggestions = report.suggestions.len(), "pacing analysis complete");
            Ok(report)
        }
    }
}

/// Build the request for a snapshot, refusing curves that are too short.
pub fn build_request(snapshot: &[EmotionPoint]) -> Result<GenerationRequest> {
    if snapshot.len() < MIN_BEATS_FOR_ANALYSIS {
        return Err(CurveError::PreconditionNotMet {
            required: MIN_BEATS_FOR_ANALYSIS,
            actual: snapshot.len(),
        });
    }

    let prompt = render_prompt(snapshot);
    tracing::debug!(prompt_len = prompt.len(), "rendered analysis prompt");

    Ok(GenerationRequest {
        prompt,
        response_schema: response_schema(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_snapshots_are_refused() {
        let one = [EmotionPoint::new(0.0, "only", 1.0, "😐")];
        for snapshot in [&one[..0], &one[..]] {
            let err = build_request(snapshot).unwrap_err();
            assert!(matches!(
                err,
                CurveError::PreconditionNotMet { required: 2, actual } if actual == snapshot.len()
            ));
        }
    }

    #[test]
    fn request_carries_schema_and_sorted_prompt() {
        let snapshot = [
            EmotionPoint::new(10.0, "late", 1.0, "😊"),
            EmotionPoint::new(0.0, "early", -1.0, "😰"),
        ];
        let request = build_request(&snapshot).unwrap();
        let early = request.prompt.find("Event: early").unwrap();
        let late = request.prompt.find("Event: late").unwrap();
        assert!(early < late);
        assert_eq!(request.response_schema, response_schema());
    }
}
