use std::path::PathBuf;
use thiserror::Error;

use crate::domain::model::Capability;

#[derive(Error, Debug)]
pub enum NetError {
    #[error("Model kind '{kind}' does not implement required capability '{capability}'")]
    UnimplementedCapability {
        kind: String,
        capability: Capability,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("Model file already exists: {}", path.display())]
    ModelAlreadyExists { path: PathBuf },

    #[error("Malformed model record: {message}")]
    RecordError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NetError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            NetError::UnimplementedCapability { .. } => ErrorSeverity::Critical,
            NetError::IoError(_) | NetError::ModelAlreadyExists { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NetError::UnimplementedCapability { kind, .. } => {
                format!("'{}' is an abstract model kind and cannot be built", kind)
            }
            NetError::IoError(e) => format!("Could not access the models directory: {}", e),
            NetError::ModelAlreadyExists { path } => format!(
                "{} already exists; remove it or allow overwriting",
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NetError>;
