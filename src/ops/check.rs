// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Check operations over the project's declarations.
//!
//! These stop at "the declaration is valid and here is what it declares".
//! Binding emission and transaction execution belong to the external tools
//! consuming the declarations.

use std::path::Path;

use eyre::{Result, WrapErr};
use log::{debug, info};

use crate::{
    bindgen::{self, BindgenConfig},
    deployment::{validate_directive, DeploymentModule},
    ops::constructor_from_artifact,
};

/// Loads and validates the binding-generation config in `dir`, reporting the
/// contract sources a generation run would use.
pub fn check_bindgen(dir: impl AsRef<Path>) -> Result<BindgenConfig> {
    let dir = dir.as_ref();
    let config = BindgenConfig::load(dir.join(bindgen::FILENAME))
        .wrap_err("failed to load binding-generation config")?;
    config
        .validate(dir)
        .wrap_err("invalid binding-generation config")?;

    info!("bindings output: {}", config.out.display());
    let sources = config
        .contract_sources(dir)
        .wrap_err("failed to collect contract sources")?;
    for source in &sources {
        debug!(
            "contract source: {} ({})",
            source.name(),
            source.artifact().display()
        );
    }
    info!("{} contract source(s) declared", sources.len());
    Ok(config)
}

/// Checks a deployment module's directives against the artifacts the binding
/// config makes available. Directives whose contract type has no artifact are
/// accepted as declared; their constructors cannot be verified here.
pub fn check_module(
    module: &DeploymentModule,
    config: &BindgenConfig,
    dir: impl AsRef<Path>,
) -> Result<()> {
    let dir = dir.as_ref();
    let sources = config.contract_sources(dir)?;

    for (logical_name, directive) in module.contracts() {
        let artifact = sources
            .iter()
            .find(|source| source.name() == directive.contract_type)
            .map(|source| dir.join(source.artifact()));

        match artifact {
            Some(path) => {
                let constructor = constructor_from_artifact(&path).wrap_err_with(|| {
                    format!("failed to read artifact for {}", directive.contract_type)
                })?;
                validate_directive(directive, constructor.as_ref()).wrap_err_with(|| {
                    format!("invalid constructor arguments for {logical_name}")
                })?;
                debug!(
                    "{logical_name}: {} ({} constructor args) checked against {}",
                    directive.contract_type,
                    directive.args.len(),
                    path.display()
                );
            }
            None => debug!(
                "{logical_name}: no artifact for {}; skipping constructor check",
                directive.contract_type
            ),
        }
    }

    info!(
        "module {} declares {} contract(s), exports {:?}",
        module.name(),
        module.contracts().count(),
        module.exports()
    );
    Ok(())
}
