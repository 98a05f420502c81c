// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Declarations for the Keyvault contract project.
//!
//! Two declarations make up the project: a binding-generation config
//! (`Bindings.toml`) telling the generator where to find contract artifacts
//! and where to write typed bindings, and a deployment module
//! ([`modules::keyvault`]) declaring a single `Keyvault` instance with no
//! constructor arguments. The rest of this crate is the typed layer those
//! declarations are loaded and checked through.

pub mod bindgen;
pub mod deployment;
pub mod modules;
pub mod ops;

pub(crate) mod error;

pub use error::{Error, Result};
