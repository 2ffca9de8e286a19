pub mod analyze;
pub mod auth;
pub mod beat;
pub mod config;
pub mod curve;

use std::path::PathBuf;

use emotioncurve_core::curve::{load_from_file, save_to_file};
use emotioncurve_core::{Config, CurveStore};

/// The curve a command works on, plus where it lives.
pub struct WorkingCurve {
    pub path: PathBuf,
    pub store: CurveStore,
    pub config: Config,
}

impl WorkingCurve {
    /// Open the curve at `file`, or the configured default.
    ///
    /// A missing file starts from the sample beats.
    pub fn open(file: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let (config, path) = Self::locate(file)?;

        let store = if path.exists() {
            load_from_file(&path)?
        } else {
            tracing::info!(path = %path.display(), "no curve file yet, starting from sample beats");
            CurveStore::with_sample_beats()
        };

        Ok(Self {
            path,
            store,
            config,
        })
    }

    /// Target the curve at `file` with `store`, without reading what is
    /// there now. Used by commands that overwrite the whole curve, so an
    /// unreadable file can still be replaced.
    pub fn replace(
        file: Option<PathBuf>,
        store: CurveStore,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let (config, path) = Self::locate(file)?;
        Ok(Self {
            path,
            store,
            config,
        })
    }

    fn locate(file: Option<PathBuf>) -> Result<(Config, PathBuf), Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let path = match file {
            Some(path) => path,
            None => config.curve_file()?,
        };
        Ok((config, path))
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        save_to_file(&self.store, &self.path)?;
        Ok(())
    }
}
