use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use serde::Deserialize;

use crate::{api::SPACEX_API_URL, fetch::RetryPolicy};

/// Show the next upcoming SpaceX launch
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Args {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// print the launch as JSON
    #[arg(long)]
    pub json: bool,

    /// API root, e.g. https://api.spacexdata.com/v4
    #[arg(long)]
    pub base_url: Option<String>,

    /// total fetch attempts
    #[arg(long)]
    pub attempts: Option<u32>,

    /// base delay between attempts, grows linearly (e.g. 500ms, 2s)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub retry_delay: Option<Duration>,
}

impl Args {
    pub fn get_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::parse_file(path)?,
            None => Config::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(attempts) = self.attempts {
            config.retry.attempts = attempts;
        }
        if let Some(delay) = self.retry_delay {
            config.retry.delay = delay;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: SPACEX_API_URL.to_owned(),
        }
    }
}

impl Config {
    pub fn parse_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let yaml_content = std::fs::read_to_string(path)?;
        Self::parse_str(&yaml_content)
    }

    pub fn parse_str(yaml_content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io -> {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml -> {0}")]
    Yaml(#[from] serde_yaml::Error),
}
