//! Whole-curve commands: text chart, export, import, presets.

use std::path::PathBuf;

use clap::Subcommand;
use emotioncurve_core::curve::{
    export_json, load_from_file, EmotionPoint, EMOTION_PRESETS, INTENSITY_MAX,
};
use emotioncurve_core::CurveStore;

use super::WorkingCurve;

/// Columns on each side of the zero line.
const HALF_WIDTH: usize = 20;

#[derive(Subcommand)]
pub enum CurveAction {
    /// Draw the curve as a text chart
    Show,
    /// Write the curve as JSON
    Export {
        /// Output file (prints to stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the working curve with a previously exported file
    Import {
        /// JSON file produced by `curve export`
        path: PathBuf,
    },
    /// Restore the starter beats
    Reset,
    /// List the emotion presets
    Presets,
}

pub fn run(action: CurveAction, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CurveAction::Show => {
            let curve = WorkingCurve::open(file)?;
            print!("{}", render_ascii_chart(&curve.store.chronological()));
        }
        CurveAction::Export { out } => {
            let curve = WorkingCurve::open(file)?;
            let json = export_json(curve.store.list())?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Exported {} beats to {}", curve.store.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
        CurveAction::Import { path } => {
            let curve = WorkingCurve::replace(file, load_from_file(&path)?)?;
            curve.save()?;
            println!(
                "Imported {} beats into {}",
                curve.store.len(),
                curve.path.display()
            );
        }
        CurveAction::Reset => {
            let curve = WorkingCurve::replace(file, CurveStore::with_sample_beats())?;
            curve.save()?;
            println!("Curve reset to starter beats");
        }
        CurveAction::Presets => {
            for preset in EMOTION_PRESETS.iter() {
                println!("{:<9} {:>+4} {}", preset.label, preset.value, preset.emoji);
            }
        }
    }
    Ok(())
}

/// Draw one row per beat around a zero line covering the fixed [-10, 10] scale.
///
/// Points must already be in time order.
fn render_ascii_chart(points: &[EmotionPoint]) -> String {
    let mut output = String::from("\nEmotion Curve:\n");
    output.push_str(&"─".repeat(70));
    output.push('\n');

    if points.is_empty() {
        output.push_str("(no beats)\n");
    }

    for point in points {
        let scaled = (point.intensity.clamp(-INTENSITY_MAX, INTENSITY_MAX) / INTENSITY_MAX
            * HALF_WIDTH as f64)
            .round() as i64;
        let len = scaled.unsigned_abs() as usize;

        let (left, right) = if scaled < 0 {
            (
                format!("{}{}", " ".repeat(HALF_WIDTH - len), "█".repeat(len)),
                " ".repeat(HALF_WIDTH),
            )
        } else {
            (
                " ".repeat(HALF_WIDTH),
                format!("{}{}", "█".repeat(len), " ".repeat(HALF_WIDTH - len)),
            )
        };

        output.push_str(&format!(
            "{:>6} {}│{} {:>+4} {} {}\n",
            point.time, left, right, point.intensity, point.emoji, point.event
        ));
    }

    output.push_str(&"─".repeat(70));
    output.push_str("\n-10 ◀ tense · · · neutral · · · thrilled ▶ +10\n");
    output
}
