//! API key storage.
//!
//! Keys are looked up in the environment first and then in the OS keyring,
//! where `auth set-key` stores them.

use crate::error::{CurveError, Result};

const SERVICE: &str = "emotioncurve";

/// Keyring entry holding the language-model API key.
pub const API_KEY_ENTRY: &str = "gemini_api_key";

/// Generic fallback variable checked after the configured one.
pub const FALLBACK_ENV: &str = "API_KEY";

fn entry(key: &str) -> Result<keyring::Entry> {
    keyring::Entry::new(SERVICE, key).map_err(|e| CurveError::Credentials(e.to_string()))
}

pub fn get(key: &str) -> Result<Option<String>> {
    match entry(key)?.get_password() {
        Ok(pw) => Ok(Some(pw)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(CurveError::Credentials(e.to_string())),
    }
}

pub fn set(key: &str, value: &str) -> Result<()> {
    entry(key)?
        .set_password(value)
        .map_err(|e| CurveError::Credentials(e.to_string()))
}

pub fn delete(key: &str) -> Result<()> {
    match entry(key)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(CurveError::Credentials(e.to_string())),
    }
}

/// Where an API key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    Keyring,
}

/// First non-blank value from the environment variables, in order.
fn from_env(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Resolve the API key and report where it came from.
pub fn locate_api_key(env_var: &str) -> Option<(String, KeySource)> {
    if let Some(key) = from_env(&[env_var, FALLBACK_ENV]) {
        return Some((key, KeySource::Environment));
    }

    match get(API_KEY_ENTRY) {
        Ok(Some(key)) if !key.trim().is_empty() => Some((key, KeySource::Keyring)),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "keyring lookup failed");
            None
        }
    }
}

/// Resolve the API key: `env_var`, then `API_KEY`, then the OS keyring.
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    locate_api_key(env_var).map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_env_var_wins() {
        std::env::set_var("EMOTIONCURVE_TEST_KEY_PRIMARY", "  primary-key  ");
        let located = locate_api_key("EMOTIONCURVE_TEST_KEY_PRIMARY");
        assert_eq!(
            located,
            Some(("primary-key".to_string(), KeySource::Environment))
        );
    }

    #[test]
    fn blank_env_values_are_skipped() {
        std::env::set_var("EMOTIONCURVE_TEST_KEY_BLANK", "   ");
        std::env::set_var("EMOTIONCURVE_TEST_KEY_SECOND", "second");
        assert_eq!(
            from_env(&["EMOTIONCURVE_TEST_KEY_BLANK", "EMOTIONCURVE_TEST_KEY_SECOND"]),
            Some("second".to_string())
        );
        assert_eq!(from_env(&["EMOTIONCURVE_TEST_KEY_UNSET"]), None);
    }
}
