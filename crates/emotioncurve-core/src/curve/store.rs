//! In-memory beat collection.

use std::collections::HashSet;

use super::point::{new_beat_id, sort_by_time, EmotionPoint};

/// Owns the beats of one curve and guarantees their ids are unique.
///
/// Storage order is insertion order and carries no meaning; use
/// [`CurveStore::chronological`] whenever time order matters.
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    points: Vec<EmotionPoint>,
}

impl CurveStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the editor's starter beats.
    pub fn with_sample_beats() -> Self {
        let mut store = Self::new();
        store.add(0.0, "Tutorial Starts", 2.0, "🤔");
        store.add(5.0, "First Enemy Encounter", 6.0, "😱");
        store.add(10.0, "Loot Box Opened", 8.0, "💎");
        store.add(15.0, "Minor Twist", -2.0, "🤨");
        store
    }

    /// Rebuild a store from previously exported points.
    ///
    /// Points with an empty id, or an id already seen earlier in the
    /// sequence, get a fresh one.
    pub fn from_points(points: impl IntoIterator<Item = EmotionPoint>) -> Self {
        let mut seen = HashSet::new();
        let mut store = Self::new();
        for mut point in points {
            if point.id.is_empty() || !seen.insert(point.id.clone()) {
                let fresh = new_beat_id();
                tracing::warn!(old = %point.id, new = %fresh, "re-keying beat with duplicate or empty id");
                seen.insert(fresh.clone());
                point.id = fresh;
            }
            store.points.push(point);
        }
        store
    }

    /// Append a new beat and return a copy of it.
    ///
    /// Intensity is stored as given; range enforcement is the caller's job.
    pub fn add(
        &mut self,
        time: f64,
        event: impl Into<String>,
        intensity: f64,
        emoji: impl Into<String>,
    ) -> EmotionPoint {
        let point = EmotionPoint::new(time, event, intensity, emoji);
        tracing::debug!(id = %point.id, time, intensity, "beat added");
        self.points.push(point.clone());
        point
    }

    /// Remove the beat with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<EmotionPoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        tracing::debug!(id, "beat removed");
        Some(self.points.remove(index))
    }

    /// All beats in insertion order.
    pub fn list(&self) -> &[EmotionPoint] {
        &self.points
    }

    pub fn get(&self, id: &str) -> Option<&EmotionPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Owned copy of the current beats, detached from later mutation.
    pub fn snapshot(&self) -> Vec<EmotionPoint> {
        self.points.clone()
    }

    /// Owned copy sorted by time ascending.
    pub fn chronological(&self) -> Vec<EmotionPoint> {
        let mut points = self.snapshot();
        sort_by_time(&mut points);
        points
    }

    /// Drop every beat.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
