// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment-module declarations.
//!
//! A module is a named unit describing contract instantiations for an
//! orchestration engine to execute. The module only declares what to create;
//! transaction construction and broadcasting belong to the engine.

use std::collections::BTreeMap;

use alloy::{
    dyn_abi::Specifier,
    json_abi::Constructor,
    primitives::{Address, U256},
};
pub use module::{ContractHandle, DeploymentModule, ModuleBuilder, ModuleError};

pub mod module;

/// Zero constructor arguments, for contracts without a constructor.
pub const NO_ARGS: [&str; 0] = [];

/// One contract instantiation: type name, ordered constructor arguments, and
/// per-call overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDirective {
    pub contract_type: String,
    /// Constructor arguments, coerced against the ABI at validation time.
    pub args: Vec<String>,
    pub options: CallOptions,
}

/// Per-directive overrides. Empty by default; the engine fills in whatever
/// is left unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Value in wei to send with the creation transaction.
    pub value: Option<U256>,
    /// Sender override.
    pub from: Option<Address>,
    /// Logical-name override. Defaults to the snake case of the type name.
    pub id: Option<String>,
}

impl CallOptions {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.from.is_none() && self.id.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error("mismatch number of constructor arguments (want {want}; got {got})")]
    ArityMismatch { want: usize, got: usize },
    #[error("could not resolve constructor arg: {0}")]
    UnresolvableParam(String),
    #[error("could not parse constructor arg {arg:?} as {ty}")]
    InvalidArg { arg: String, ty: String },
}

/// Checks a directive's constructor arguments against the contract's ABI
/// constructor. `None` means the contract declares no constructor, which only
/// a zero-argument directive satisfies.
pub fn validate_directive(
    directive: &ContractDirective,
    constructor: Option<&Constructor>,
) -> Result<(), DirectiveError> {
    let inputs = constructor.map(|c| c.inputs.as_slice()).unwrap_or_default();
    if directive.args.len() != inputs.len() {
        return Err(DirectiveError::ArityMismatch {
            want: inputs.len(),
            got: directive.args.len(),
        });
    }
    for (arg, param) in directive.args.iter().zip(inputs) {
        let ty = param
            .resolve()
            .map_err(|_| DirectiveError::UnresolvableParam(param.to_string()))?;
        ty.coerce_str(arg).map_err(|_| DirectiveError::InvalidArg {
            arg: arg.clone(),
            ty: param.ty.clone(),
        })?;
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum NamespaceError {
    #[error("duplicate deployment module: {0:?}")]
    DuplicateModule(String),
}

/// Modules registered for one deployment run, keyed by module name.
#[derive(Debug, Default)]
pub struct DeploymentNamespace {
    modules: BTreeMap<String, DeploymentModule>,
}

impl DeploymentNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module: DeploymentModule) -> Result<(), NamespaceError> {
        if self.modules.contains_key(module.name()) {
            return Err(NamespaceError::DuplicateModule(module.name().to_owned()));
        }
        self.modules.insert(module.name().to_owned(), module);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DeploymentModule> {
        self.modules.get(name)
    }

    pub fn modules(&self) -> impl Iterator<Item = &DeploymentModule> {
        self.modules.values()
    }
}
