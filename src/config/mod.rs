pub mod local;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::OverwritePolicy;
#[cfg(feature = "cli")]
use crate::utils::error::{NetError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-nn")]
#[command(about = "Run a forward pass on a placeholder network and optionally save it")]
pub struct CliConfig {
    /// Path to a TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model kind to build (dummy, network)
    #[arg(long)]
    pub kind: Option<String>,

    /// Descriptive model name, also used as the saved file name
    #[arg(long)]
    pub model_name: Option<String>,

    /// Input for the forward pass, parsed as JSON when possible
    #[arg(long, default_value = "0")]
    pub input: String,

    /// Extra JSON data handed to save_model
    #[arg(long)]
    pub data: Option<String>,

    /// Save the model after the forward pass
    #[arg(long)]
    pub save: bool,

    #[arg(long)]
    pub models_dir: Option<String>,

    #[arg(long)]
    pub extension: Option<String>,

    /// Fail instead of overwriting an existing model file
    #[arg(long)]
    pub no_overwrite: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (or defaults) and applies flag overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(kind) = &self.kind {
            config.model.kind = kind.parse()?;
        }
        if let Some(name) = &self.model_name {
            config.model.name = Some(name.clone());
        }
        if let Some(dir) = &self.models_dir {
            config.storage.directory = dir.clone();
        }
        if let Some(extension) = &self.extension {
            config.storage.extension = extension.clone();
        }
        if self.no_overwrite {
            config.storage.on_existing = OverwritePolicy::Refuse;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn input_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.input)
            .unwrap_or_else(|_| serde_json::Value::String(self.input.clone()))
    }

    pub fn data_value(&self) -> Result<Option<serde_json::Value>> {
        match &self.data {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| NetError::InvalidConfigValueError {
                    field: "data".to_string(),
                    value: raw.clone(),
                    reason: format!("not valid JSON: {}", e),
                }),
            None => Ok(None),
        }
    }
}
