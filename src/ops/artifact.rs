// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, io::BufReader, path::Path};

use alloy::json_abi::{Constructor, JsonAbi};
use eyre::{bail, Result};
use serde_json::Value;

/// Reads the ABI constructor from a contract artifact JSON. Returns `None`
/// when the contract declares no constructor.
pub fn constructor_from_artifact(path: impl AsRef<Path>) -> Result<Option<Constructor>> {
    let f = fs::File::open(&path)?;
    let artifact: Value = serde_json::from_reader(BufReader::new(f))?;

    let Some(raw) = artifact.get("abi") else {
        bail!(
            "did not find abi in artifact {}",
            path.as_ref().to_string_lossy()
        )
    };
    let abi_json = serde_json::to_string(raw)?;
    let abi: JsonAbi = serde_json::from_str(&abi_json)?;
    Ok(abi.constructor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn constructor_absent() {
        let file = artifact(r#"{"abi":[{"type":"fallback","stateMutability":"payable"}]}"#);
        let constructor = constructor_from_artifact(file.path()).unwrap();
        assert!(constructor.is_none());
    }

    #[test]
    fn constructor_present() {
        let file = artifact(
            r#"{"abi":[{
                "type": "constructor",
                "inputs": [{"name": "owner", "type": "address", "internalType": "address"}],
                "stateMutability": "nonpayable"
            }]}"#,
        );
        let constructor = constructor_from_artifact(file.path()).unwrap().unwrap();
        assert_eq!(constructor.inputs.len(), 1);
        assert_eq!(constructor.inputs[0].ty, "address");
    }

    #[test]
    fn abi_missing() {
        let file = artifact(r#"{"bytecode":{"object":"0x"}}"#);
        assert!(constructor_from_artifact(file.path()).is_err());
    }
}
