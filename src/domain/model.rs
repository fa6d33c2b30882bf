use crate::utils::error::{NetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One member of the capability set every concrete network provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Forward,
    SaveModel,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Forward => write!(f, "forward"),
            Capability::SaveModel => write!(f, "save_model"),
        }
    }
}

/// What a store does when the target file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    #[default]
    Overwrite,
    Refuse,
}

/// Serializable state of a network variant, enough to rebuild it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSnapshot {
    Dummy { model_name: String },
}

impl ModelSnapshot {
    pub fn model_name(&self) -> &str {
        match self {
            ModelSnapshot::Dummy { model_name } => model_name,
        }
    }
}

/// On-disk record: `{ model_name: snapshot }` with exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedModelRecord {
    entries: BTreeMap<String, ModelSnapshot>,
}

impl PersistedModelRecord {
    pub fn new(snapshot: ModelSnapshot) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(snapshot.model_name().to_string(), snapshot);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, model_name: &str) -> Option<&ModelSnapshot> {
        self.entries.get(model_name)
    }

    /// Name of the single model this record holds. Rejects records with
    /// zero or several models, or with a key that disagrees with the snapshot.
    pub fn model_name(&self) -> Result<&str> {
        let mut entries = self.entries.iter();
        let (key, snapshot) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(NetError::RecordError {
                    message: format!("expected exactly one model, found {}", self.entries.len()),
                })
            }
        };

        if key != snapshot.model_name() {
            return Err(NetError::RecordError {
                message: format!(
                    "key '{}' does not match model name '{}'",
                    key,
                    snapshot.model_name()
                ),
            });
        }

        Ok(key)
    }

    pub fn into_snapshot(self) -> Result<ModelSnapshot> {
        let key = self.model_name()?.to_string();
        let mut entries = self.entries;
        entries.remove(&key).ok_or_else(|| NetError::RecordError {
            message: "record is empty".to_string(),
        })
    }
}
