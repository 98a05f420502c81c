// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Binding-generation configuration.
//!
//! `Bindings.toml` declares where generated contract bindings are written and
//! how the generator locates contract artifacts: an explicit contract list,
//! or discovery plugins reading a local build project's output. When both are
//! present the explicit list wins.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use serde::Deserialize;

pub use contract::ContractDescriptor;
pub use plugin::{DiscoveredContract, Plugin, PluginError};

pub mod contract;
pub mod plugin;

/// Filename for binding-generation config files.
pub const FILENAME: &str = "Bindings.toml";

#[derive(Debug, thiserror::Error)]
pub enum BindgenConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing Bindings.toml")]
    Missing,

    #[error("invalid output path: {}", .0.display())]
    InvalidOutPath(PathBuf),
    #[error("invalid contract entry: {0:?}")]
    InvalidContract(String),
    #[error("duplicate contract entry: {0:?}")]
    DuplicateContract(String),

    #[error("{0}")]
    Plugin(#[from] PluginError),
}

/// Declared inputs and output of a binding-generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BindgenConfig {
    /// Destination path for generated bindings, relative to the config file.
    pub out: PathBuf,
    /// Explicit contract list. May be empty when plugins supply the contracts.
    #[serde(default)]
    pub contracts: Vec<ContractDescriptor>,
    /// Artifact-discovery strategies, applied in order.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl BindgenConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BindgenConfigError> {
        if !path.as_ref().exists() {
            return Err(BindgenConfigError::Missing);
        }

        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Checks the declared shape and resolves every plugin's project
    /// directory relative to `base_dir` (the directory holding the config).
    pub fn validate(&self, base_dir: impl AsRef<Path>) -> Result<(), BindgenConfigError> {
        if !valid_out_path(&self.out) {
            return Err(BindgenConfigError::InvalidOutPath(self.out.clone()));
        }
        for descriptor in &self.contracts {
            if descriptor.name.is_empty() || descriptor.abi.as_os_str().is_empty() {
                return Err(BindgenConfigError::InvalidContract(descriptor.name.clone()));
            }
            let dups = self.contracts.iter().filter(|d| d.name == descriptor.name);
            if dups.count() > 1 {
                return Err(BindgenConfigError::DuplicateContract(descriptor.name.clone()));
            }
        }
        for plugin in &self.plugins {
            plugin.resolve_project(&base_dir)?;
        }
        Ok(())
    }

    /// Contract sources for a generation run. The explicit list takes
    /// precedence; plugin discovery is only consulted when it is empty.
    pub fn contract_sources(
        &self,
        base_dir: impl AsRef<Path>,
    ) -> Result<Vec<ContractSource>, BindgenConfigError> {
        if !self.contracts.is_empty() {
            return Ok(self
                .contracts
                .iter()
                .cloned()
                .map(ContractSource::Explicit)
                .collect());
        }

        let mut sources = Vec::new();
        for plugin in &self.plugins {
            for discovered in plugin.discover(&base_dir)? {
                sources.push(ContractSource::Discovered(discovered));
            }
        }
        Ok(sources)
    }
}

/// A contract a generation run will emit bindings for, either declared
/// explicitly or discovered by a plugin.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractSource {
    Explicit(ContractDescriptor),
    Discovered(DiscoveredContract),
}

impl ContractSource {
    pub fn name(&self) -> &str {
        match self {
            Self::Explicit(descriptor) => &descriptor.name,
            Self::Discovered(discovered) => &discovered.name,
        }
    }

    /// Path of the artifact JSON backing this source, relative to the
    /// directory the config was loaded from.
    pub fn artifact(&self) -> &Path {
        match self {
            Self::Explicit(descriptor) => &descriptor.abi,
            Self::Discovered(discovered) => &discovered.artifact,
        }
    }
}

fn valid_out_path(out: &Path) -> bool {
    !out.as_os_str().is_empty()
        && out.is_relative()
        && out.file_name().is_some()
        && !out.components().any(|c| c == Component::ParentDir)
}
