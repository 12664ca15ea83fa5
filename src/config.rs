use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::notion::fetcher::DEFAULT_PAGE_SIZE;

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid NOTION_PAGE_SIZE: {0} (expected 1..=100)")]
    InvalidPageSize(String),

    #[error("Invalid boolean for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notion_token: Option<String>,
    pub notion_api_base_url: String,
    pub notion_version: String,
    pub page_size: u32,
    pub skip_empty_paragraphs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            notion_token: None,
            notion_api_base_url: "https://api.notion.com".to_string(),
            notion_version: "2022-06-28".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            skip_empty_paragraphs: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        if let Some(host) = get("HOST") {
            config.host = host;
        }

        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        config.notion_token = get("NOTION_TOKEN");

        if let Some(url) = get("NOTION_API_BASE_URL") {
            config.notion_api_base_url = url;
        }

        if let Some(version) = get("NOTION_VERSION") {
            config.notion_version = version;
        }

        if let Some(size) = get("NOTION_PAGE_SIZE") {
            config.page_size = match size.parse::<u32>() {
                Ok(n) if (1..=MAX_PAGE_SIZE).contains(&n) => n,
                _ => return Err(ConfigError::InvalidPageSize(size)),
            };
        }

        if let Some(flag) = get("SKIP_EMPTY_PARAGRAPHS") {
            config.skip_empty_paragraphs = parse_flag("SKIP_EMPTY_PARAGRAPHS", flag)?;
        }

        Ok(config)
    }
}

/// Loads a `.env` file into the process environment. Variables that are
/// already set win over the file. Without a path, `.env` is looked up from
/// the working directory upwards. A missing file yields `Ok(None)`.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_API_BASE_URL", "http://localhost:9000"),
            ("NOTION_VERSION", "2025-09-03"),
            ("NOTION_PAGE_SIZE", "100"),
            ("SKIP_EMPTY_PARAGRAPHS", "true"),
        ])
        .unwrap();

        assert_eq!(
            config,
            Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                notion_token: Some("secret_abc".to_string()),
                notion_api_base_url: "http://localhost:9000".to_string(),
                notion_version: "2025-09-03".to_string(),
                page_size: 100,
                skip_empty_paragraphs: true,
            }
        );
    }

    #[test]
    fn blank_token_counts_as_missing() {
        assert_eq!(load(&[("NOTION_TOKEN", "  ")]).unwrap().notion_token, None);
    }

    #[test]
    fn rejects_bad_port() {
        assert_eq!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        for size in ["0", "101", "-1", "fifty"] {
            assert_eq!(
                load(&[("NOTION_PAGE_SIZE", size)]),
                Err(ConfigError::InvalidPageSize(size.to_string()))
            );
        }
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(matches!(
            load(&[("SKIP_EMPTY_PARAGRAPHS", "maybe")]),
            Err(ConfigError::InvalidFlag {
                name: "SKIP_EMPTY_PARAGRAPHS",
                ..
            })
        ));
    }

    #[test]
    fn dotenv_file_fills_only_unset_variables() {
        let path = env::temp_dir().join(format!("notion-proxy-{}.env", std::process::id()));
        fs::write(
            &path,
            "NOTION_PROXY_DOTENV_FILLED=from-file\nNOTION_PROXY_DOTENV_PRESET=from-file\n",
        )
        .unwrap();
        env::set_var("NOTION_PROXY_DOTENV_PRESET", "from-process");

        let loaded = load_dotenv(Some(&path));
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap(), Some(path));
        assert_eq!(
            env::var("NOTION_PROXY_DOTENV_FILLED").as_deref(),
            Ok("from-file")
        );
        assert_eq!(
            env::var("NOTION_PROXY_DOTENV_PRESET").as_deref(),
            Ok("from-process")
        );
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let path = env::temp_dir().join("notion-proxy-missing-dir/.env");

        assert!(matches!(load_dotenv(Some(&path)), Ok(None)));
    }

    #[test]
    fn malformed_dotenv_file_is_an_error() {
        let path = env::temp_dir().join(format!("notion-proxy-bad-{}.env", std::process::id()));
        fs::write(&path, "NOT A VALID LINE\n").unwrap();

        let loaded = load_dotenv(Some(&path));
        fs::remove_file(&path).unwrap();

        assert!(loaded.is_err());
    }
}
