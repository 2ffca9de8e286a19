use clap::Subcommand;
use emotioncurve_core::storage::credentials::{self, KeySource, API_KEY_ENTRY};
use emotioncurve_core::Config;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the language-model API key in the OS keyring
    SetKey {
        /// API key
        key: String,
    },
    /// Remove the stored API key
    Clear,
    /// Show where the API key would be read from
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetKey { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err("API key must not be empty".into());
            }
            credentials::set(API_KEY_ENTRY, key)?;
            println!("API key stored in keyring");
        }
        AuthAction::Clear => {
            credentials::delete(API_KEY_ENTRY)?;
            println!("API key removed from keyring");
        }
        AuthAction::Status => {
            let config = Config::load_or_default();
            let env_var = &config.analysis.api_key_env;
            match credentials::locate_api_key(env_var) {
                Some((_, KeySource::Environment)) => {
                    println!("API key: found in environment ({env_var} or {})", credentials::FALLBACK_ENV)
                }
                Some((_, KeySource::Keyring)) => println!("API key: found in keyring"),
                None => println!("API key: not configured (set {env_var} or run `auth set-key`)"),
            }
        }
    }
    Ok(())
}
