use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The analysis configuration as written in a TOML file. Every key is optional.
///
/// ```toml
/// bond-layout = "standard"
/// duplicate-policy = "exact-pair"
/// residues-of-interest = ["SEP", "TPO"]
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub bond_layout: Option<String>,
    pub duplicate_policy: Option<String>,
    pub residues_of_interest: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        Self::from_toml(&content).map_err(|source| CliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
