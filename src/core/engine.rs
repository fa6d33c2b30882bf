use crate::core::dummy::PASS_THRESHOLD;
use crate::core::{Module, ModelStore, Network, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub model_name: String,
    pub output: i64,
    pub passed: bool,
    pub saved_to: Option<PathBuf>,
}

/// Drives one forward pass and, when a store is attached, one save.
pub struct NetworkEngine<'s, N> {
    network: N,
    store: Option<&'s dyn ModelStore>,
}

impl<'s, N> NetworkEngine<'s, N>
where
    N: Network,
{
    pub fn new(network: N) -> Self {
        Self {
            network,
            store: None,
        }
    }

    pub fn with_store(network: N, store: &'s dyn ModelStore) -> Self {
        Self {
            network,
            store: Some(store),
        }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn run<X>(&self, input: X, data: Option<&serde_json::Value>) -> Result<RunReport>
    where
        N: Module<X, Output = i64>,
    {
        let model_name = self.network.model_name().to_string();
        tracing::info!("Running forward pass on {}", model_name);

        let output = self.network.forward(input);
        let passed = output > PASS_THRESHOLD;
        if passed {
            tracing::info!("Output {} is above {}", output, PASS_THRESHOLD);
        } else {
            tracing::warn!("Output {} does not exceed {}", output, PASS_THRESHOLD);
        }

        let saved_to = match self.store {
            Some(store) => Some(self.network.save_model(store, data)?),
            None => None,
        };

        Ok(RunReport {
            model_name,
            output,
            passed,
            saved_to,
        })
    }
}
