//! Inspect and edit `config.toml` by dot-separated key.

use clap::Subcommand;
use emotioncurve_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dot-separated key (e.g. "analysis.model", "curve.enforce_intensity_range")
        key: String,
    },
    /// Change one setting; the value is parsed as the setting's type
    Set {
        key: String,
        value: String,
    },
    /// Print every setting as `key = value`
    List {
        /// Print the whole config as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print where the config file lives
    Path,
    /// Restore default settings
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown config key: {key}. See `config list`"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            let stored = config.get(&key).unwrap_or(value);
            tracing::debug!(%key, %stored, "config updated");
            println!("{key} = {stored}");
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries()? {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Path => println!("{}", Config::file_path()?.display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Config reset to defaults at {}", Config::file_path()?.display());
        }
    }
    Ok(())
}
