pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{local::LocalModelStore, toml_config::TomlConfig};
pub use crate::core::{
    dummy::DummyMachine,
    engine::{NetworkEngine, RunReport},
    factory::{AnyNetwork, ModelKind},
    Module, ModelStore, Network,
};
pub use utils::error::{NetError, Result};
