//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Analysis backend settings (model, endpoint, timeout)
//! - Where the API key is looked up
//! - The working curve file and intensity range enforcement
//!
//! Configuration is stored at `~/.config/emotioncurve/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Analysis backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Environment variable consulted first for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Curve editing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Working curve file; relative paths resolve against the data directory.
    #[serde(default = "default_curve_file")]
    pub default_file: String,
    /// Refuse beats outside [-10, 10] at entry time.
    #[serde(default = "default_true")]
    pub enforce_intensity_range: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/emotioncurve/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub curve: CurveSettings,
}

// Default functions
fn default_model() -> String {
    "gemini-3-flash-preview".into()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}
fn default_curve_file() -> String {
    "emotion_curve.json".into()
}
fn default_true() -> bool {
    true
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            default_file: default_curve_file(),
            enforce_intensity_range: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Location of `config.toml` inside the data directory.
    pub fn file_path() -> Result<PathBuf> {
        Ok(data_dir()?.join(CONFIG_FILE))
    }

    /// Every leaf setting as a `(dot.key, value)` pair, in key order.
    ///
    /// Keys are exactly those accepted by [`Config::get`] and [`Config::set`].
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (name, child) in map {
                        let key = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{prefix}.{name}")
                        };
                        walk(&key, child, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        walk("", &serde_json::to_value(self)?, &mut out);
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(out)
    }

    /// Load from the data directory, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::file_path()?)
    }

    /// Load from an explicit path, writing defaults there if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(load_failed(e.to_string()).into()),
        }
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::file_path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value in memory. The value is parsed according to the
    /// type of the existing entry.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Set a config value by key and persist. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Resolve the working curve file.
    pub fn curve_file(&self) -> Result<PathBuf> {
        let configured = PathBuf::from(&self.curve.default_file);
        if configured.is_absolute() {
            Ok(configured)
        } else {
            Ok(data_dir()?.join(configured))
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.analysis.model, "gemini-3-flash-preview");
        assert_eq!(cfg.analysis.endpoint, "https://generativelanguage.googleapis.com");
        assert_eq!(cfg.analysis.timeout_secs, 60);
        assert_eq!(cfg.analysis.api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.curve.default_file, "emotion_curve.json");
        assert!(cfg.curve.enforce_intensity_range);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[analysis]\nmodel = \"gemini-pro\"\n").unwrap();
        assert_eq!(parsed.analysis.model, "gemini-pro");
        assert_eq!(parsed.analysis.timeout_secs, 60);
        assert_eq!(parsed.curve, CurveSettings::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("analysis.timeout_secs").as_deref(), Some("60"));
        assert_eq!(cfg.get("curve.enforce_intensity_range").as_deref(), Some("true"));
        assert_eq!(cfg.get("analysis.model").as_deref(), Some("gemini-3-flash-preview"));
        assert!(cfg.get("analysis.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_value_updates_each_type() {
        let mut cfg = Config::default();
        cfg.set_value("analysis.timeout_secs", "15").unwrap();
        cfg.set_value("curve.enforce_intensity_range", "false").unwrap();
        cfg.set_value("analysis.model", "gemini-2.5-pro").unwrap();
        assert_eq!(cfg.analysis.timeout_secs, 15);
        assert!(!cfg.curve.enforce_intensity_range);
        assert_eq!(cfg.analysis.model, "gemini-2.5-pro");
    }

    #[test]
    fn set_value_rejects_unknown_key() {
        let mut cfg = Config::default();
        let result = cfg.set_value("analysis.temperature", "0.2");
        assert!(matches!(
            result,
            Err(CurveError::Config(ConfigError::UnknownKey(_)))
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_value_rejects_invalid_type() {
        let mut cfg = Config::default();
        let result = cfg.set_value("curve.enforce_intensity_range", "sometimes");
        assert!(matches!(
            result,
            Err(CurveError::Config(ConfigError::InvalidValue { .. }))
        ));
        let result = cfg.set_value("analysis.timeout_secs", "-5");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_creates_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, Config::default());

        let mut edited = created;
        edited.set_value("analysis.timeout_secs", "5").unwrap();
        edited.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().analysis.timeout_secs, 5);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "analysis = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(CurveError::Config(ConfigError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn entries_flatten_to_settable_keys() {
        let mut cfg = Config::default();
        cfg.set_value("analysis.timeout_secs", "15").unwrap();
        let entries = cfg.entries().unwrap();

        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "analysis.api_key_env",
                "analysis.endpoint",
                "analysis.model",
                "analysis.timeout_secs",
                "curve.default_file",
                "curve.enforce_intensity_range",
            ]
        );
        for (key, value) in &entries {
            assert_eq!(cfg.get(key).as_deref(), Some(value.as_str()), "{key}");
        }
        assert!(entries.contains(&("analysis.timeout_secs".into(), "15".into())));
    }

    #[test]
    fn absolute_curve_file_is_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("beats.json");
        let mut cfg = Config::default();
        cfg.curve.default_file = file.to_string_lossy().into_owned();
        assert_eq!(cfg.curve_file().unwrap(), file);
    }
}
