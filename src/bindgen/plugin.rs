// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Artifact-discovery plugins.
//!
//! A plugin tells the generator where compiled contract artifacts come from
//! when no explicit contract list is declared.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),
    #[error("not a buildable foundry project (missing foundry.toml): {}", .0.display())]
    NotAProject(PathBuf),
    #[error("no artifacts found under {}", .0.display())]
    NoArtifacts(PathBuf),
}

/// Strategy for locating compiled contract artifacts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plugin {
    /// Reads artifacts from a local foundry project's `out/` directory.
    Foundry { project: PathBuf },
}

impl Plugin {
    /// Resolves the plugin's project directory relative to `base_dir`,
    /// checking that it is a buildable project.
    pub fn resolve_project(&self, base_dir: impl AsRef<Path>) -> Result<PathBuf, PluginError> {
        let Self::Foundry { project } = self;
        let dir = base_dir.as_ref().join(project);
        if !dir.is_dir() {
            return Err(PluginError::ProjectNotFound(dir));
        }
        if !dir.join("foundry.toml").is_file() {
            return Err(PluginError::NotAProject(dir));
        }
        Ok(dir)
    }

    /// Enumerates the artifacts of the resolved project, ordered by contract
    /// name. Foundry lays them out as `out/<File>.sol/<Contract>.json`.
    /// Artifact paths come back relative to `base_dir`, the same way explicit
    /// contract entries declare theirs.
    pub fn discover(
        &self,
        base_dir: impl AsRef<Path>,
    ) -> Result<Vec<DiscoveredContract>, PluginError> {
        let Self::Foundry { project } = self;
        let resolved = self.resolve_project(&base_dir)?;
        let out_dir = resolved.join("out");
        if !out_dir.is_dir() {
            return Err(PluginError::NoArtifacts(out_dir));
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(&out_dir)? {
            let dir = entry?.path();
            if !dir.is_dir() || dir.extension() != Some(OsStr::new("sol")) {
                continue;
            }
            let Some(dir_name) = dir.file_name().map(ToOwned::to_owned) else {
                continue;
            };
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.extension() != Some(OsStr::new("json")) {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(OsStr::to_str) else {
                    continue;
                };
                // versioned artifacts like Keyvault.0.8.23.json are duplicates
                if name.contains('.') {
                    continue;
                }
                let artifact = project
                    .join("out")
                    .join(&dir_name)
                    .join(format!("{name}.json"));
                found.push(DiscoveredContract {
                    name: name.to_owned(),
                    artifact,
                });
            }
        }
        found.sort_by(|a, b| a.name.cmp(&b.name));

        if found.is_empty() {
            return Err(PluginError::NoArtifacts(out_dir));
        }
        Ok(found)
    }
}

/// Contract artifact found by a plugin. The artifact path is relative to the
/// directory the config was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredContract {
    pub name: String,
    pub artifact: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foundry_project(root: &Path, contracts: &[&str]) -> PathBuf {
        let project = root.join("contracts");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("foundry.toml"), "[profile.default]\n").unwrap();
        for contract in contracts {
            let dir = project.join("out").join(format!("{contract}.sol"));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{contract}.json")), r#"{"abi":[]}"#).unwrap();
        }
        project
    }

    #[test]
    fn resolve_missing_project() {
        let plugin = Plugin::Foundry {
            project: "contracts".into(),
        };
        let tmp = tempfile::tempdir().unwrap();
        let err = plugin.resolve_project(tmp.path()).unwrap_err();
        assert!(matches!(err, PluginError::ProjectNotFound(_)));
    }

    #[test]
    fn resolve_non_project_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("contracts")).unwrap();
        let plugin = Plugin::Foundry {
            project: "contracts".into(),
        };
        let err = plugin.resolve_project(tmp.path()).unwrap_err();
        assert!(matches!(err, PluginError::NotAProject(_)));
    }

    #[test]
    fn discover_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let project = foundry_project(tmp.path(), &["Keyvault", "Counter"]);

        // versioned duplicate artifacts are skipped
        fs::write(
            project.join("out/Keyvault.sol/Keyvault.0.8.23.json"),
            r#"{"abi":[]}"#,
        )
        .unwrap();

        let plugin = Plugin::Foundry {
            project: "contracts".into(),
        };
        let found = plugin.discover(tmp.path()).unwrap();
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Counter", "Keyvault"]);

        // paths are relative to the config dir, like explicit entries
        assert_eq!(
            found[1].artifact,
            Path::new("contracts/out/Keyvault.sol/Keyvault.json")
        );
    }

    #[test]
    fn discover_empty_out_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let project = foundry_project(tmp.path(), &[]);
        fs::create_dir_all(project.join("out")).unwrap();

        let plugin = Plugin::Foundry {
            project: "contracts".into(),
        };
        let err = plugin.discover(tmp.path()).unwrap_err();
        assert!(matches!(err, PluginError::NoArtifacts(_)));
    }
}
