//! Prompt rendering for pacing analysis.

use indoc::formatdoc;

use crate::curve::{sort_by_time, EmotionPoint};

/// One descriptive line per beat.
pub fn render_beat_line(point: &EmotionPoint) -> String {
    format!(
        "Time: {}, Event: {}, Intensity: {}, Emoji: {}",
        point.time, point.event, point.intensity, point.emoji
    )
}

/// Render beats in chronological order, one per line.
pub fn render_beats(points: &[EmotionPoint]) -> String {
    let mut sorted = points.to_vec();
    sort_by_time(&mut sorted);
    sorted
        .iter()
        .map(render_beat_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full instruction prompt for a curve.
pub fn render_prompt(points: &[EmotionPoint]) -> String {
    formatdoc! {"
        As an expert game designer, analyze the following player emotion curve for a game sequence:
        {beats}

        Evaluate the pacing (Koster's Theory of Fun, flow state).
        Check for:
        1. \"The Peak-End Rule\" (Is the climax strong and the ending satisfying?).
        2. Emotional variety (Is it too flat or too chaotic?).
        3. Tension/Release cycles (Do negative and positive swings alternate, or does the curve drift one way?).

        Respond ONLY with JSON containing \"summary\", \"pacingFeedback\" and \"suggestions\" (a list of strings).
        ",
        beats = render_beats(points),
    }
}
