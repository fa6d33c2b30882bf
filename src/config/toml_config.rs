use crate::config::local::{DEFAULT_EXTENSION, DEFAULT_MODELS_DIR};
use crate::core::factory::ModelKind;
use crate::core::{OverwritePolicy, StoreSettings};
use crate::utils::error::{NetError, Result};
use crate::utils::validation::{validate_extension, validate_model_name, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub kind: ModelKind,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub on_existing: OverwritePolicy,
}

fn default_directory() -> String {
    DEFAULT_MODELS_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            on_existing: OverwritePolicy::default(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NetError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NetError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn model_name(&self) -> &str {
        self.model
            .name
            .as_deref()
            .unwrap_or(self.model.kind.default_name())
    }
}

impl StoreSettings for TomlConfig {
    fn models_dir(&self) -> &str {
        &self.storage.directory
    }

    fn extension(&self) -> &str {
        &self.storage.extension
    }

    fn overwrite_policy(&self) -> OverwritePolicy {
        self.storage.on_existing
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_model_name(self.model_name())?;
        validate_path("storage.directory", &self.storage.directory)?;
        validate_extension("storage.extension", &self.storage.extension)?;
        Ok(())
    }
}
