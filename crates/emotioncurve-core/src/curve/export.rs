//! JSON export and import of a curve.
//!
//! The file format is a plain array of beat objects in chronological order,
//! the same shape the editor downloads as `emotion_curve.json`.

use std::path::Path;

use super::point::{sort_by_time, EmotionPoint};
use super::store::CurveStore;
use crate::error::Result;

/// Serialize beats as a pretty JSON array sorted by time.
///
/// Non-finite times or intensities are refused: JSON would store them as
/// `null` and the file could not be loaded again.
pub fn export_json(points: &[EmotionPoint]) -> Result<String> {
    for point in points {
        point.ensure_finite()?;
    }
    let mut sorted = points.to_vec();
    sort_by_time(&mut sorted);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Parse a JSON array of beats.
pub fn import_json(content: &str) -> Result<Vec<EmotionPoint>> {
    Ok(serde_json::from_str(content)?)
}

/// Write the store to `path`, creating parent directories as needed.
pub fn save_to_file(store: &CurveStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, export_json(store.list())?)?;
    tracing::debug!(path = %path.display(), beats = store.len(), "curve saved");
    Ok(())
}

/// Load a store from `path`.
pub fn load_from_file(path: &Path) -> Result<CurveStore> {
    let content = std::fs::read_to_string(path)?;
    let points = import_json(&content)?;
    tracing::debug!(path = %path.display(), beats = points.len(), "curve loaded");
    Ok(CurveStore::from_points(points))
}
