//! Pacing analysis through an external language model.
//!
//! The client renders a chronological prompt, asks the backend for JSON that
//! matches [`response_schema`], and validates the answer into an
//! [`AnalysisReport`].

pub mod client;
pub mod gemini;
pub mod prompt;
pub mod report;
pub mod traits;

pub use client::{build_request, AnalysisClient, MIN_BEATS_FOR_ANALYSIS};
pub use gemini::GeminiGenerator;
pub use prompt::{render_beat_line, render_beats, render_prompt};
pub use report::{parse_report, response_schema, AnalysisReport};
pub use traits::{ContentGenerator, GenerationRequest};
