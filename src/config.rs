use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config: {0}")]
    Yaml(#[from] serde_yaml::Error)
}

/// How the console draws the board.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Drawn for an empty dark square.
    pub empty_cell: String,
    /// Drawn for a light square.
    pub light_cell: String,
    /// Whether to label columns with letters and rows with numbers.
    pub show_coordinates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_cell: "----".into(),
            light_cell: "    ".into(),
            show_coordinates: true,
        }
    }
}

impl Config {
    /// Load the config from `path`. A missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => Self::parse(&fs::read_to_string(p)?),
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
