use std::env;
use std::path::PathBuf;

use crate::modules::contact_form::application::domain::fields::DEFAULT_MESSAGE_MAX_LENGTH;

pub const DEFAULT_STORE_PATH: &str = ".portfolio-store.json";
pub const DEFAULT_PROJECTS_URL: &str =
    "https://api.jsonbin.io/v3/b/69327a77d0ea881f40140f45/latest";
pub const DEFAULT_RESUME_URL: &str = "https://api.jsonbin.io/v3/b/6932d80943b1c97be9d9a12c/latest";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file standing in for origin-scoped storage.
    pub store_path: PathBuf,
    pub projects_url: String,
    pub resume_url: String,
    pub contact_form_action: Option<String>,
    pub message_max_length: usize,
    /// Colour-scheme signal for hosts without a media query.
    pub prefers_dark: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            projects_url: DEFAULT_PROJECTS_URL.to_string(),
            resume_url: DEFAULT_RESUME_URL.to_string(),
            contact_form_action: None,
            message_max_length: DEFAULT_MESSAGE_MAX_LENGTH,
            prefers_dark: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let message_max_length = match get("CONTACT_MESSAGE_MAX_LENGTH") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "CONTACT_MESSAGE_MAX_LENGTH",
                        value: raw,
                    })
                }
            },
            None => defaults.message_max_length,
        };

        let prefers_dark = match get("PREFERS_DARK") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                key: "PREFERS_DARK",
                value: raw,
            })?,
            None => defaults.prefers_dark,
        };

        Ok(Self {
            store_path: get("PORTFOLIO_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            projects_url: get("PROJECTS_REMOTE_URL").unwrap_or(defaults.projects_url),
            resume_url: get("RESUME_REMOTE_URL").unwrap_or(defaults.resume_url),
            contact_form_action: get("CONTACT_FORM_ACTION"),
            message_max_length,
            prefers_dark,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "dark" => Some(true),
        "0" | "false" | "no" | "light" => Some(false),
        _ => None,
    }
}
