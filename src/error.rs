// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("{0}")]
    BindgenConfig(#[from] crate::bindgen::BindgenConfigError),
    #[error("{0}")]
    Plugin(#[from] crate::bindgen::plugin::PluginError),
    #[error("{0}")]
    Module(#[from] crate::deployment::module::ModuleError),
    #[error("{0}")]
    Namespace(#[from] crate::deployment::NamespaceError),
    #[error("{0}")]
    Directive(#[from] crate::deployment::DirectiveError),
}
