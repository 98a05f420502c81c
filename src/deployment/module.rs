// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use convert_case::{Case, Casing};

use super::{CallOptions, ContractDirective};

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid module or contract name: {0:?}")]
    InvalidName(String),
    #[error("invalid contract type name: {0:?}")]
    InvalidContractType(String),
    #[error("duplicate contract {0:?} in module")]
    DuplicateContract(String),
    #[error("module declares no contracts")]
    Empty,
    #[error("export {0:?} does not match a declared contract")]
    UnknownExport(String),
    #[error("duplicate export {0:?}")]
    DuplicateExport(String),
    #[error("export {export:?} belongs to module {module:?}")]
    ForeignExport { export: String, module: String },
}

/// Built deployment module: ordered contract directives keyed by logical
/// name, plus the logical names exported for other modules to import.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentModule {
    name: String,
    contracts: Vec<(String, ContractDirective)>,
    exports: Vec<String>,
}

impl DeploymentModule {
    /// Builds a module by running `declare` against a fresh builder.
    pub fn build(
        name: impl Into<String>,
        declare: impl FnOnce(&mut ModuleBuilder) -> Result<(), ModuleError>,
    ) -> Result<Self, ModuleError> {
        let name = name.into();
        if !is_name(&name) {
            return Err(ModuleError::InvalidName(name));
        }
        let mut builder = ModuleBuilder {
            name,
            contracts: Vec::new(),
            exports: Vec::new(),
        };
        declare(&mut builder)?;
        builder.finish()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directives in declaration order.
    pub fn contracts(&self) -> impl Iterator<Item = (&str, &ContractDirective)> {
        self.contracts
            .iter()
            .map(|(name, directive)| (name.as_str(), directive))
    }

    pub fn directive(&self, logical_name: &str) -> Option<&ContractDirective> {
        self.contracts
            .iter()
            .find(|(name, _)| name == logical_name)
            .map(|(_, directive)| directive)
    }

    pub fn exports(&self) -> &[String] {
        &self.exports
    }
}

/// Collects a module's directives and exports.
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    contracts: Vec<(String, ContractDirective)>,
    exports: Vec<String>,
}

impl ModuleBuilder {
    /// Declares one contract instantiation and returns a handle to it. The
    /// logical name is the snake case of the type name unless `options.id`
    /// overrides it.
    pub fn contract(
        &mut self,
        contract_type: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        options: CallOptions,
    ) -> Result<ContractHandle, ModuleError> {
        let contract_type = contract_type.into();
        if !is_type_name(&contract_type) {
            return Err(ModuleError::InvalidContractType(contract_type));
        }

        let logical_name = match &options.id {
            Some(id) => id.clone(),
            None => contract_type.to_case(Case::Snake),
        };
        if !is_name(&logical_name) {
            return Err(ModuleError::InvalidName(logical_name));
        }
        if self.contracts.iter().any(|(name, _)| *name == logical_name) {
            return Err(ModuleError::DuplicateContract(logical_name));
        }

        let directive = ContractDirective {
            contract_type,
            args: args.into_iter().map(Into::into).collect(),
            options,
        };
        self.contracts.push((logical_name.clone(), directive));
        Ok(ContractHandle {
            module: self.name.clone(),
            name: logical_name,
        })
    }

    /// Marks a declared contract as part of the module's exported shape.
    pub fn export(&mut self, handle: &ContractHandle) -> Result<(), ModuleError> {
        if handle.module != self.name {
            return Err(ModuleError::ForeignExport {
                export: handle.name.clone(),
                module: handle.module.clone(),
            });
        }
        if !self.contracts.iter().any(|(name, _)| *name == handle.name) {
            return Err(ModuleError::UnknownExport(handle.name.clone()));
        }
        if self.exports.contains(&handle.name) {
            return Err(ModuleError::DuplicateExport(handle.name.clone()));
        }
        self.exports.push(handle.name.clone());
        Ok(())
    }

    fn finish(self) -> Result<DeploymentModule, ModuleError> {
        if self.contracts.is_empty() {
            return Err(ModuleError::Empty);
        }
        Ok(DeploymentModule {
            name: self.name,
            contracts: self.contracts,
            exports: self.exports,
        })
    }
}

/// Reference to a contract declared by a module, usable as an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractHandle {
    module: String,
    name: String,
}

impl ContractHandle {
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn is_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
