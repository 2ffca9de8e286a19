//! A single beat on the emotion curve.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// Lowest intensity on the chart scale.
pub const INTENSITY_MIN: f64 = -10.0;
/// Highest intensity on the chart scale.
pub const INTENSITY_MAX: f64 = 10.0;

/// One narrative or gameplay beat.
///
/// Points are immutable once stored; an edit is a remove followed by an add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPoint {
    /// Opaque identity, used only for removal.
    pub id: String,
    /// Position on the timeline (minutes or any other unit).
    pub time: f64,
    /// Human-readable label for the beat.
    pub event: String,
    /// Emotional valence, nominally -10 (distress) to 10 (delight).
    pub intensity: f64,
    /// Display glyph.
    pub emoji: String,
}

impl EmotionPoint {
    /// Build a point with a freshly generated id.
    pub fn new(time: f64, event: impl Into<String>, intensity: f64, emoji: impl Into<String>) -> Self {
        Self {
            id: new_beat_id(),
            time,
            event: event.into(),
            intensity,
            emoji: emoji.into(),
        }
    }

    /// Whether `intensity` lies on the [-10, 10] chart scale.
    pub fn is_in_range(&self) -> bool {
        (INTENSITY_MIN..=INTENSITY_MAX).contains(&self.intensity)
    }

    /// Fail if `time` or `intensity` is NaN or infinite.
    pub fn ensure_finite(&self) -> Result<()> {
        for (field, value) in [("time", self.time), ("intensity", self.intensity)] {
            if !value.is_finite() {
                return Err(CurveError::NonFiniteValue {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn new_beat_id() -> String {
    format!("beat-{}", uuid::Uuid::new_v4())
}

/// Stable ascending sort by `time`.
///
/// Beats sharing a time keep their relative order, so the result is the
/// same no matter how often it is applied.
pub fn sort_by_time(points: &mut [EmotionPoint]) {
    points.sort_by(|a, b| a.time.total_cmp(&b.time));
}
