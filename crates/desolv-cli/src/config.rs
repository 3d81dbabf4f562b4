//! Analysis settings assembled from defaults, an optional TOML file and CLI flags.

pub mod builder;
pub mod file;

pub use builder::build_config;
