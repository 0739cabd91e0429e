//! Runtime configuration read from the environment.
//!
//! | Variable             | Default         |
//! |----------------------|-----------------|
//! | `FORMS_HOST`         | `127.0.0.1`     |
//! | `FORMS_PORT`         | `8080`          |
//! | `FORMS_DB_PATH`      | `forms.sqlite`  |
//! | `FORMS_OPEN_BROWSER` | `true`          |
//! | `FORMS_JSON_LIMIT`   | `10485760` (10 MB) |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub open_browser: bool,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("forms.sqlite"),
            open_browser: true,
            json_limit: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for every unset key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("FORMS_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "FORMS_PORT", defaults.port)?,
            db_path: lookup("FORMS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            open_browser: parse_flag(&lookup, "FORMS_OPEN_BROWSER", defaults.open_browser)?,
            json_limit: parse_or(&lookup, "FORMS_JSON_LIMIT", defaults.json_limit)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("FORMS_PORT", "9090"),
            ("FORMS_DB_PATH", "/tmp/x.sqlite"),
            ("FORMS_OPEN_BROWSER", "off"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.sqlite"));
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port_is_reported() {
        let err = Config::from_lookup(lookup(&[("FORMS_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "FORMS_PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn bad_flag_is_reported() {
        assert!(Config::from_lookup(lookup(&[("FORMS_OPEN_BROWSER", "maybe")])).is_err());
    }
}
