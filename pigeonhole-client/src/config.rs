use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};

use crate::PigeonholeClientError;

/// Client configuration with all fields ready to use.
#[derive(Debug, Clone)]
pub struct Config {
    pub message_url: Url,
    pub key_url: Url,
}

impl Config {
    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self, PigeonholeClientError> {
        let config_string = std::fs::read_to_string(&config_path)?;
        let config_file = ConfigFile::from_str(&config_string)?;
        Self::from_config_file(config_file)
    }

    pub fn from_config_file(config: ConfigFile) -> Result<Self, PigeonholeClientError> {
        Ok(Self {
            message_url: config.endpoint("message")?,
            key_url: config.endpoint("key")?,
        })
    }
}

/// Client configuration file format.
///
/// `server_uri` is the base address of the exchange service; `namespace` is
/// the path segment scoping this client's message and key collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ConfigFile {
    pub server_uri: String,
    pub namespace: String,
}

impl ConfigFile {
    fn endpoint(&self, resource: &str) -> Result<Url, PigeonholeClientError> {
        let base = self.server_uri.trim_end_matches('/');
        let namespace = self.namespace.trim_matches('/');
        Ok(Url::parse(&format!("{base}/{namespace}/{resource}"))?)
    }
}

impl FromStr for ConfigFile {
    type Err = PigeonholeClientError;

    fn from_str(config_string: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(config_string)?)
    }
}
