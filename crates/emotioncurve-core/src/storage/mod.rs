//! On-disk state: the TOML config, the API key store, and the directory
//! both live under.

mod config;
pub mod credentials;

pub use config::{AnalysisSettings, Config, CurveSettings};

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Selects the development data directory when set to `dev`.
pub const ENV_VAR: &str = "EMOTIONCURVE_ENV";

/// Where config, curve and last report are kept for a given home and
/// profile. Any profile other than `dev` maps to the regular directory.
pub fn resolve_data_dir(home: &Path, profile: Option<&str>) -> PathBuf {
    let name = match profile.map(str::trim) {
        Some("dev") => "emotioncurve-dev",
        _ => "emotioncurve",
    };
    home.join(".config").join(name)
}

/// The data directory for the current user, created if needed.
///
/// Falls back to the working directory when no home is known.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let profile = std::env::var(ENV_VAR).ok();
    let dir = resolve_data_dir(&home, profile.as_deref());

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_profile_uses_plain_directory() {
        let home = Path::new("/home/designer");
        let expected = PathBuf::from("/home/designer/.config/emotioncurve");
        assert_eq!(resolve_data_dir(home, None), expected);
        assert_eq!(resolve_data_dir(home, Some("production")), expected);
        assert_eq!(resolve_data_dir(home, Some("")), expected);
    }

    #[test]
    fn dev_profile_is_kept_apart() {
        let dir = resolve_data_dir(Path::new("/home/designer"), Some(" dev "));
        assert_eq!(dir, PathBuf::from("/home/designer/.config/emotioncurve-dev"));
    }
}
