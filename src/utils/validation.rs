use crate::utils::error::{NetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A model name doubles as a file stem, so it must be a single path component.
pub fn validate_model_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty or whitespace-only")
    } else if name.contains('\0') {
        Some("name contains null bytes")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name == "." || name == ".." {
        Some("name cannot be a relative directory")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(NetError::InvalidModelName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(NetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(NetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(NetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be non-empty and alphanumeric, without a leading dot"
                .to_string(),
        });
    }
    Ok(())
}
