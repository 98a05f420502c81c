// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::primitives::Address;
use serde::Deserialize;

/// Explicitly declared contract, bypassing plugin discovery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContractDescriptor {
    pub name: String,
    /// Artifact JSON holding the contract's ABI, relative to the config file.
    pub abi: PathBuf,
    /// Deployed address, for bindings that bake one in.
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn parse_descriptor_with_address() {
        let descriptor: ContractDescriptor = toml::from_str(
            r#"
            name = "Keyvault"
            abi = "abi/Keyvault.json"
            address = "0xcEcba2F1DC234f70Dd89F2041029807F8D03A990"
            "#,
        )
        .expect("failed to parse");
        assert_eq!(descriptor.name, "Keyvault");
        assert_eq!(
            descriptor.address,
            Some(address!("cEcba2F1DC234f70Dd89F2041029807F8D03A990"))
        );
    }
}
