use crate::core::{ModelStore, OverwritePolicy, PersistedModelRecord, StoreSettings};
use crate::utils::error::{NetError, Result};
use crate::utils::validation::validate_model_name;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODELS_DIR: &str = "models";
pub const DEFAULT_EXTENSION: &str = "json";

/// Writes one JSON record per model under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalModelStore {
    base_path: PathBuf,
    extension: String,
    overwrite: OverwritePolicy,
}

impl LocalModelStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            overwrite: OverwritePolicy::default(),
        }
    }

    pub fn from_settings<S: StoreSettings + ?Sized>(settings: &S) -> Self {
        Self::new(settings.models_dir())
            .with_extension(settings.extension())
            .with_overwrite_policy(settings.overwrite_policy())
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_overwrite_policy(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_path.is_dir() {
            tracing::debug!("Creating models directory {}", self.base_path.display());
        }
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }
}

impl Default for LocalModelStore {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS_DIR)
    }
}

impl ModelStore for LocalModelStore {
    fn save_record(&self, record: &PersistedModelRecord) -> Result<PathBuf> {
        let model_name = record.model_name()?;
        validate_model_name(model_name)?;
        self.ensure_dir()?;

        let full_path = self.record_path(model_name);
        let data = serde_json::to_vec_pretty(record)?;

        match self.overwrite {
            OverwritePolicy::Overwrite => {
                if full_path.exists() {
                    tracing::warn!("Overwriting existing model file {}", full_path.display());
                }
                fs::write(&full_path, data)?;
            }
            OverwritePolicy::Refuse => {
                let mut file = match OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&full_path)
                {
                    Ok(file) => file,
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        return Err(NetError::ModelAlreadyExists { path: full_path });
                    }
                    Err(e) => return Err(e.into()),
                };
                file.write_all(&data)?;
            }
        }

        Ok(full_path)
    }

    fn load_record(&self, model_name: &str) -> Result<PersistedModelRecord> {
        validate_model_name(model_name)?;

        let full_path = self.record_path(model_name);
        let data = fs::read(&full_path)?;
        let record: PersistedModelRecord = serde_json::from_slice(&data)?;

        let stored_name = record.model_name()?;
        if stored_name != model_name {
            return Err(NetError::RecordError {
                message: format!(
                    "{} holds model '{}', expected '{}'",
                    full_path.display(),
                    stored_name,
                    model_name
                ),
            });
        }

        tracing::debug!("Loaded model record from {}", full_path.display());
        Ok(record)
    }

    fn record_path(&self, model_name: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", model_name, self.extension))
    }
}
