//
//  bitbucket-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Optional file-based configuration for [`BitbucketClient`](crate::BitbucketClient).
//! Nothing here is required: a client built with
//! [`BitbucketClient::new`](crate::BitbucketClient::new) talks to the public
//! API with no configuration at all.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/bitbucket-rest/config.toml`
//! - **macOS**: `~/Library/Application Support/bitbucket-rest/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\bitbucket-rest\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! v1_base_url = "https://bitbucket.org/api/1.0/"
//! v2_base_url = "https://api.bitbucket.org/2.0/"
//! user_agent = "release-bot/1.0"
//! timeout_secs = 30
//!
//! [credentials]
//! username = "release-bot"
//! password = "app-password"
//! ```
//!
//! ## Environment
//!
//! [`ClientConfig::apply_env`] overrides the credentials from
//! `BITBUCKET_USERNAME`, `BITBUCKET_PASSWORD` and `BITBUCKET_ACCESS_TOKEN`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitbucket_rest::BitbucketClient;
//! use bitbucket_rest::config::ClientConfig;
//!
//! let mut config = ClientConfig::load()?;
//! config.apply_env();
//! let client = BitbucketClient::from_config(&config)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{V1_BASE_URL, V2_BASE_URL};
use crate::auth::Credentials;

/// Directory name under the platform config root.
const APP_DIR: &str = "bitbucket-rest";

/// Client settings, serialized as TOML.
///
/// All fields use `#[serde(default)]`, so a partial file only overrides what
/// it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the v1 API.
    #[serde(default = "default_v1_base_url")]
    pub v1_base_url: String,

    /// Root of the v2 API.
    #[serde(default = "default_v2_base_url")]
    pub v2_base_url: String,

    /// `User-Agent` header. `None` uses `bitbucket-rest/<version>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Per-request timeout. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,
}

fn default_v1_base_url() -> String {
    V1_BASE_URL.to_string()
}

fn default_v2_base_url() -> String {
    V2_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            v1_base_url: default_v1_base_url(),
            v2_base_url: default_v2_base_url(),
            user_agent: None,
            timeout_secs: None,
            credentials: None,
        }
    }
}

/// The `[credentials]` table.
///
/// An `access_token` wins over `username`/`password` when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account or app password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// OAuth 2.0 access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from `path`. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file. The file may not exist.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_DIR)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overrides credentials from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overrides credentials from `lookup`, which maps a variable name to
    /// its value. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let username = get("BITBUCKET_USERNAME");
        let password = get("BITBUCKET_PASSWORD");
        let access_token = get("BITBUCKET_ACCESS_TOKEN");

        if username.is_none() && password.is_none() && access_token.is_none() {
            return;
        }

        let credentials = self.credentials.get_or_insert_with(CredentialsConfig::default);
        if username.is_some() {
            credentials.username = username;
        }
        if password.is_some() {
            credentials.password = password;
        }
        if access_token.is_some() {
            credentials.access_token = access_token;
        }
    }

    /// Credentials described by the configuration, if complete.
    ///
    /// A username without a password (or the reverse) yields `None`.
    pub fn credentials(&self) -> Option<Credentials> {
        let creds = self.credentials.as_ref()?;

        if let Some(token) = &creds.access_token {
            return Some(Credentials::oauth(token.clone()));
        }

        match (&creds.username, &creds.password) {
            (Some(username), Some(password)) => {
                Some(Credentials::app_password(username.clone(), password.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.v1_base_url, "https://bitbucket.org/api/1.0/");
        assert_eq!(config.v2_base_url, "https://api.bitbucket.org/2.0/");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ClientConfig::from_toml_str("timeout_secs = 15\n").unwrap();
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.v2_base_url, V2_BASE_URL);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_credentials_table() {
        let config = ClientConfig::from_toml_str(
            r#"
            [credentials]
            username = "bot"
            password = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.credentials(),
            Some(Credentials::app_password("bot", "secret"))
        );
    }

    #[test]
    fn test_access_token_wins() {
        let config = ClientConfig::from_toml_str(
            r#"
            [credentials]
            username = "bot"
            password = "secret"
            access_token = "tok"
            "#,
        )
        .unwrap();
        assert_eq!(config.credentials(), Some(Credentials::oauth("tok")));
    }

    #[test]
    fn test_incomplete_credentials() {
        let config = ClientConfig::from_toml_str("[credentials]\nusername = \"bot\"\n").unwrap();
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml_str("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClientConfig::from_toml_str(
            "[credentials]\nusername = \"file-user\"\npassword = \"file-pw\"\n",
        )
        .unwrap();
        config.apply_env_from(env(&[("BITBUCKET_PASSWORD", "env-pw"), ("BITBUCKET_USERNAME", "")]));

        assert_eq!(
            config.credentials(),
            Some(Credentials::app_password("file-user", "env-pw"))
        );
    }

    #[test]
    fn test_env_creates_credentials() {
        let mut config = ClientConfig::default();
        config.apply_env_from(env(&[]));
        assert!(config.credentials.is_none());

        config.apply_env_from(env(&[("BITBUCKET_ACCESS_TOKEN", "env-token")]));
        assert_eq!(config.credentials(), Some(Credentials::oauth("env-token")));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ClientConfig {
            user_agent: Some("release-bot/1.0".to_string()),
            timeout_secs: Some(30),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
