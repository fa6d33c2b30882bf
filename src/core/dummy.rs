use crate::core::{Module, ModelSnapshot, ModelStore, Network, PersistedModelRecord, Result};
use crate::utils::validation::validate_model_name;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_DUMMY_NAME: &str = "dummy_machine";

/// What the placeholder returns for every input.
pub const DUMMY_OUTPUT: i64 = 60;

/// Outputs above this count as a passing forward pass.
pub const PASS_THRESHOLD: i64 = 59;

/// Dummy machine: a stand-in network whose forward pass ignores its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyMachine {
    model_name: String,
}

impl DummyMachine {
    pub fn new(model_name: impl Into<String>) -> Result<Self> {
        let model_name = model_name.into();
        validate_model_name(&model_name)?;
        Ok(Self { model_name })
    }
}

impl Default for DummyMachine {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_DUMMY_NAME.to_string(),
        }
    }
}

impl<X> Module<X> for DummyMachine {
    type Output = i64;

    fn forward(&self, _input: X) -> i64 {
        DUMMY_OUTPUT
    }
}

impl Network for DummyMachine {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot::Dummy {
            model_name: self.model_name.clone(),
        }
    }

    fn save_model(
        &self,
        store: &dyn ModelStore,
        data: Option<&serde_json::Value>,
    ) -> Result<PathBuf> {
        if data.is_some() {
            tracing::debug!("{} has no extra state, ignoring save data", self.model_name);
        }

        let record = PersistedModelRecord::new(self.snapshot());
        let path = store.save_record(&record)?;
        tracing::info!("Saved {} to {}", self.model_name, path.display());
        Ok(path)
    }
}

impl fmt::Display for DummyMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A dummy machine")
    }
}
