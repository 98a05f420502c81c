// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::deployment::{CallOptions, DeploymentModule, ModuleError, NO_ARGS};

/// Deployment module for the Keyvault contract: a single `Keyvault` instance
/// with no constructor arguments and no overrides, exported under the
/// module's own name.
pub fn keyvault() -> Result<DeploymentModule, ModuleError> {
    DeploymentModule::build("keyvault", |m| {
        let keyvault = m.contract("Keyvault", NO_ARGS, CallOptions::default())?;
        m.export(&keyvault)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_one_keyvault() {
        let module = keyvault().unwrap();
        assert_eq!(module.name(), "keyvault");
        assert_eq!(module.contracts().count(), 1);

        let directive = module.directive("keyvault").unwrap();
        assert_eq!(directive.contract_type, "Keyvault");
        assert!(directive.args.is_empty());
        assert!(directive.options.is_empty());

        assert_eq!(module.exports(), ["keyvault"]);
    }

    #[test]
    fn building_is_idempotent() {
        assert_eq!(keyvault().unwrap(), keyvault().unwrap());
    }
}
