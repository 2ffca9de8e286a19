//! Emotion curve data model.
//!
//! A curve is an unordered bag of beats; chronological order is derived on
//! demand by sorting on `time`.

mod export;
mod point;
mod presets;
mod store;

pub use export::{export_json, import_json, load_from_file, save_to_file};
pub use point::{sort_by_time, EmotionPoint, INTENSITY_MAX, INTENSITY_MIN};
pub use presets::{find_preset, neutral, EmotionPreset, EMOTION_PRESETS};
pub use store::CurveStore;
