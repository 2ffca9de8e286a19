//! Quick-pick emotions offered when entering a beat.

use serde::Serialize;

/// A named intensity with its glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionPreset {
    pub label: &'static str,
    pub value: f64,
    pub emoji: &'static str,
}

/// Presets from most positive to most negative.
pub const EMOTION_PRESETS: [EmotionPreset; 7] = [
    EmotionPreset { label: "Thrilled", value: 10.0, emoji: "🤩" },
    EmotionPreset { label: "Excited", value: 7.0, emoji: "😃" },
    EmotionPreset { label: "Happy", value: 4.0, emoji: "😊" },
    EmotionPreset { label: "Neutral", value: 0.0, emoji: "😐" },
    EmotionPreset { label: "Tense", value: -3.0, emoji: "😰" },
    EmotionPreset { label: "Anxious", value: -6.0, emoji: "😨" },
    EmotionPreset { label: "Despair", value: -10.0, emoji: "😭" },
];

/// Case-insensitive lookup by label.
pub fn find_preset(label: &str) -> Option<&'static EmotionPreset> {
    EMOTION_PRESETS
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
}

/// The neutral preset, used when a beat is entered without an emoji.
pub fn neutral() -> &'static EmotionPreset {
    &EMOTION_PRESETS[3]
}
