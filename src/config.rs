use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::source::DEFAULT_ENDPOINT;
use crate::task::Filter;

const DEFAULT_CONFIG_PATH: &str = "taskview.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub filter: Filter,
    pub select: Option<u64>,
}

impl Config {
    /// Load the config file (if any) and merge CLI overrides on top.
    /// A missing file at the default path is fine; a missing file passed
    /// explicitly via `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let config_path = Path::new(path);

        let file_config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            parse_config(&content, config_path)?
        } else if cli.config.is_some() {
            return Err(Error::ConfigNotFound(config_path.to_path_buf()));
        } else {
            ConfigFile::default()
        };

        merge(file_config, cli)
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)
        .map_err(|e| Error::ConfigParse(path.to_path_buf(), e))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConfigFile) -> Result<()> {
    if let Some(ref filter) = config.filter {
        filter
            .parse::<Filter>()
            .map_err(Error::ConfigValidation)?;
    }
    if let Some(ref endpoint) = config.endpoint
        && endpoint.trim().is_empty()
    {
        return Err(Error::ConfigValidation(
            "endpoint must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Result<Config> {
    let filter = match cli.filter.as_deref().or(file.filter.as_deref()) {
        Some(s) => s.parse::<Filter>().map_err(Error::ConfigValidation)?,
        None => Filter::default(),
    };

    Ok(Config {
        endpoint: cli
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        filter,
        select: cli.select,
    })
}
