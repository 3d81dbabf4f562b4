use super::file::FileConfig;
use crate::cli::AnalysisOverrides;
use crate::error::{CliError, Result};
use desolv::core::io::bonds::{BondLayout, DuplicatePolicy};
use desolv::engine::config::{AnalysisConfig, AnalysisConfigBuilder, InterestSelection};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Merges CLI flags over the configuration file over the library defaults.
pub fn build_config(
    overrides: &AnalysisOverrides,
    config_path: Option<&Path>,
) -> Result<AnalysisConfig> {
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    merge(overrides, file_config)
}

fn merge(overrides: &AnalysisOverrides, file_config: FileConfig) -> Result<AnalysisConfig> {
    let mut builder = AnalysisConfigBuilder::new();

    let bond_layout = match overrides.bond_layout {
        Some(layout) => Some(layout),
        None => parse_option::<BondLayout>(file_config.bond_layout.as_deref(), "bond-layout")?,
    };
    if let Some(layout) = bond_layout {
        builder = builder.bond_layout(layout);
    }

    let duplicate_policy = match overrides.duplicate_policy {
        Some(policy) => Some(policy),
        None => parse_option::<DuplicatePolicy>(
            file_config.duplicate_policy.as_deref(),
            "duplicate-policy",
        )?,
    };
    if let Some(policy) = duplicate_policy {
        builder = builder.duplicate_policy(policy);
    }

    let residues = overrides
        .residues_of_interest
        .clone()
        .or(file_config.residues_of_interest);
    if let Some(names) = residues {
        builder = builder.residues_of_interest(InterestSelection::ResidueNames(names));
    }

    let config = builder.build()?;
    debug!("Final analysis configuration: {:?}", config);
    Ok(config)
}

fn parse_option<T>(value: Option<&str>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| CliError::Config(format!("{key}: {e}")))
        })
        .transpose()
}
