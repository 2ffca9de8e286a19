use std::future::Future;

use serde_json::Value;

use crate::error::AnalysisFailure;

/// One structured-output generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Instruction text sent to the model.
    pub prompt: String,
    /// Schema the returned JSON must satisfy.
    pub response_schema: Value,
}

/// Every text-generation backend implements this trait.
/// A call is a single request/response exchange: no streaming, no retry.
pub trait ContentGenerator: Send + Sync {
    /// Unique identifier (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send the request and return the raw text payload.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, AnalysisFailure>> + Send;
}
