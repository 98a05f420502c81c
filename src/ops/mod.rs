// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use artifact::constructor_from_artifact;
pub use check::{check_bindgen, check_module};

mod artifact;
mod check;
