use std::path::PathBuf;

use clap::Subcommand;
use emotioncurve_core::curve::{find_preset, neutral, EmotionPoint, INTENSITY_MAX, INTENSITY_MIN};

use super::WorkingCurve;

#[derive(Subcommand)]
pub enum BeatAction {
    /// Add a beat to the curve
    Add {
        /// Position on the timeline (e.g. minutes)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
        time: f64,
        /// What happens at this beat
        #[arg(long)]
        event: String,
        /// Emotional intensity, -10 to 10
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite, required_unless_present = "preset", conflicts_with = "preset")]
        intensity: Option<f64>,
        /// Named emotion (thrilled, excited, happy, neutral, tense, anxious, despair)
        #[arg(long)]
        preset: Option<String>,
        /// Display glyph (defaults to the preset's)
        #[arg(long)]
        emoji: Option<String>,
    },
    /// Remove a beat by id
    Remove {
        /// Beat id as shown by `beat list`
        id: String,
    },
    /// List beats in time order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove every beat
    Clear,
}

pub fn run(action: BeatAction, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut curve = WorkingCurve::open(file)?;

    match action {
        BeatAction::Add {
            time,
            event,
            intensity,
            preset,
            emoji,
        } => {
            let event = event.trim();
            if event.is_empty() {
                return Err("event label must not be empty".into());
            }

            let (intensity, preset_emoji) = match (intensity, preset) {
                (Some(value), _) => (value, neutral().emoji),
                (None, Some(label)) => {
                    let preset = find_preset(&label)
                        .ok_or_else(|| format!("unknown preset: '{label}'. See `curve presets`"))?;
                    (preset.value, preset.emoji)
                }
                (None, None) => return Err("either --intensity or --preset is required".into()),
            };

            if curve.config.curve.enforce_intensity_range
                && !(INTENSITY_MIN..=INTENSITY_MAX).contains(&intensity)
            {
                return Err(format!(
                    "intensity {intensity} is outside [{INTENSITY_MIN}, {INTENSITY_MAX}] \
                     (disable with `config set curve.enforce_intensity_range false`)"
                )
                .into());
            }

            let emoji = emoji.unwrap_or_else(|| preset_emoji.to_string());
            let point = curve.store.add(time, event, intensity, emoji);
            curve.save()?;
            println!("Beat added: {}", point.id);
            println!("  {}", describe(&point));
        }
        BeatAction::Remove { id } => match curve.store.remove(&id) {
            Some(point) => {
                curve.save()?;
                println!("Beat removed: {}", describe(&point));
            }
            None => println!("No beat with id {id}; nothing changed"),
        },
        BeatAction::List { json } => {
            let points = curve.store.chronological();
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else if points.is_empty() {
                println!("No beats yet. Add one with `beat add`.");
            } else {
                for point in &points {
                    println!("{}  {}", point.id, describe(point));
                }
            }
        }
        BeatAction::Clear => {
            let count = curve.store.len();
            curve.store.clear();
            curve.save()?;
            println!("Removed {count} beats");
        }
    }
    Ok(())
}

/// Parse a number, refusing NaN and infinities.
fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}

fn describe(point: &EmotionPoint) -> String {
    format!(
        "t={} {} {:+} {}",
        point.time, point.emoji, point.intensity, point.event
    )
}
