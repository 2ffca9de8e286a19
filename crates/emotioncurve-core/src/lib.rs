//! # EmotionCurve Core Library
//!
//! This library provides the core logic for EmotionCurve, a tool for
//! sketching the emotional arc of a game sequence and getting pacing
//! feedback on it. The `emotioncurve` CLI is a thin caller over the same
//! library.
//!
//! ## Architecture
//!
//! - **Curve**: An in-memory store of beats with unique ids; chronological
//!   order is derived by sorting on time wherever it is needed
//! - **Analysis**: One structured-output request to a language model per
//!   call, validated into a typed report
//! - **Storage**: TOML-based configuration and API key lookup
//!
//! ## Key Components
//!
//! - [`CurveStore`]: Beat collection with add/remove/list
//! - [`AnalysisClient`]: Snapshot-to-report analysis front-end
//! - [`ContentGenerator`]: Trait for text-generation backends
//! - [`Config`]: Application configuration management

pub mod analysis;
pub mod curve;
pub mod error;
pub mod storage;

pub use analysis::{AnalysisClient, AnalysisReport, ContentGenerator, GeminiGenerator, GenerationRequest};
pub use curve::{CurveStore, EmotionPoint, EmotionPreset, EMOTION_PRESETS};
pub use error::{AnalysisFailure, ConfigError, CurveError};
pub use storage::{AnalysisSettings, Config, CurveSettings};
