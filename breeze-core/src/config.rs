use anyhow::{Result, anyhow};
use std::env;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// A missing or blank API key is fatal: the binary refuses to start
    /// rather than sending unauthenticated requests.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::var(API_KEY_ENV).ok())
    }

    fn from_lookup(raw: Option<String>) -> Result<Self> {
        match raw {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(anyhow!(
                "{API_KEY_ENV} environment variable is not set.\n\
                 Hint: export {API_KEY_ENV}=<your OpenWeather API key> and try again."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_an_error() {
        let err = Config::from_lookup(None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn blank_key_is_an_error() {
        let err = Config::from_lookup(Some("   ".to_string())).unwrap_err();
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn present_key_is_accepted() {
        let cfg = Config::from_lookup(Some("SECRET".to_string())).expect("key must be accepted");
        assert_eq!(cfg.api_key, "SECRET");
    }
}
