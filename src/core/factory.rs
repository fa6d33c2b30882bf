use crate::core::dummy::{DummyMachine, DEFAULT_DUMMY_NAME};
use crate::core::{Module, ModelSnapshot, ModelStore, Network, PersistedModelRecord, Result};
use crate::domain::model::Capability;
use crate::utils::error::NetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_NETWORK_NAME: &str = "dummy_network";

pub const REQUIRED_CAPABILITIES: [Capability; 2] = [Capability::Forward, Capability::SaveModel];

/// Network variants selectable at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// The abstract base. Declares the interface, implements none of it.
    Network,
    #[default]
    Dummy,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Network => "network",
            ModelKind::Dummy => "dummy",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            ModelKind::Network => DEFAULT_NETWORK_NAME,
            ModelKind::Dummy => DEFAULT_DUMMY_NAME,
        }
    }

    pub fn implemented_capabilities(&self) -> &'static [Capability] {
        match self {
            ModelKind::Network => &[],
            ModelKind::Dummy => &REQUIRED_CAPABILITIES,
        }
    }

    pub fn missing_capabilities(&self) -> Vec<Capability> {
        REQUIRED_CAPABILITIES
            .iter()
            .copied()
            .filter(|c| !self.implemented_capabilities().contains(c))
            .collect()
    }

    /// Builds the variant. Kinds lacking part of the capability set fail
    /// before the name is looked at.
    pub fn build(&self, model_name: Option<&str>) -> Result<AnyNetwork> {
        match self {
            ModelKind::Dummy => {
                let model_name = model_name.unwrap_or(self.default_name());
                tracing::debug!("Building {} model '{}'", self.as_str(), model_name);
                Ok(AnyNetwork::Dummy(DummyMachine::new(model_name)?))
            }
            ModelKind::Network => Err(self.unimplemented()),
        }
    }

    fn unimplemented(&self) -> NetError {
        let capability = self
            .missing_capabilities()
            .first()
            .copied()
            .unwrap_or(Capability::Forward);
        NetError::UnimplementedCapability {
            kind: self.as_str().to_string(),
            capability,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Network => write!(f, "This is the base class for all networks we will use"),
            ModelKind::Dummy => write!(f, "A dummy machine"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "network" => Ok(ModelKind::Network),
            "dummy" => Ok(ModelKind::Dummy),
            other => Err(NetError::InvalidConfigValueError {
                field: "model.kind".to_string(),
                value: other.to_string(),
                reason: "Unknown model kind. Valid kinds: network, dummy".to_string(),
            }),
        }
    }
}

/// Static dispatch over every buildable variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyNetwork {
    Dummy(DummyMachine),
}

impl AnyNetwork {
    pub fn kind(&self) -> ModelKind {
        match self {
            AnyNetwork::Dummy(_) => ModelKind::Dummy,
        }
    }
}

impl<X> Module<X> for AnyNetwork {
    type Output = i64;

    fn forward(&self, input: X) -> i64 {
        match self {
            AnyNetwork::Dummy(model) => model.forward(input),
        }
    }
}

impl Network for AnyNetwork {
    fn model_name(&self) -> &str {
        match self {
            AnyNetwork::Dummy(model) => model.model_name(),
        }
    }

    fn snapshot(&self) -> ModelSnapshot {
        match self {
            AnyNetwork::Dummy(model) => model.snapshot(),
        }
    }

    fn save_model(
        &self,
        store: &dyn ModelStore,
        data: Option<&serde_json::Value>,
    ) -> Result<PathBuf> {
        match self {
            AnyNetwork::Dummy(model) => model.save_model(store, data),
        }
    }
}

impl fmt::Display for AnyNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyNetwork::Dummy(model) => fmt::Display::fmt(model, f),
        }
    }
}

impl From<DummyMachine> for AnyNetwork {
    fn from(model: DummyMachine) -> Self {
        AnyNetwork::Dummy(model)
    }
}

impl ModelSnapshot {
    pub fn restore(self) -> Result<AnyNetwork> {
        match self {
            ModelSnapshot::Dummy { model_name } => Ok(DummyMachine::new(model_name)?.into()),
        }
    }
}

impl PersistedModelRecord {
    pub fn into_model(self) -> Result<AnyNetwork> {
        self.into_snapshot()?.restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_kind_fails_at_build() {
        let err = ModelKind::Network.build(None).unwrap_err();
        match err {
            NetError::UnimplementedCapability { kind, capability } => {
                assert_eq!(kind, "network");
                assert_eq!(capability, Capability::Forward);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_abstract_kind_fails_even_with_bad_name() {
        // capability check runs before name validation
        let err = ModelKind::Network.build(Some("")).unwrap_err();
        assert!(matches!(err, NetError::UnimplementedCapability { .. }));
    }

    #[test]
    fn test_missing_capabilities() {
        assert_eq!(
            ModelKind::Network.missing_capabilities(),
            vec![Capability::Forward, Capability::SaveModel]
        );
        assert!(ModelKind::Dummy.missing_capabilities().is_empty());
    }

    #[test]
    fn test_build_dummy_default_name() {
        let model = ModelKind::Dummy.build(None).unwrap();
        assert_eq!(model.model_name(), "dummy_machine");
        assert_eq!(model.kind(), ModelKind::Dummy);
        assert_eq!(model.forward(1.0_f64), 60);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("dummy".parse::<ModelKind>().unwrap(), ModelKind::Dummy);
        assert_eq!(" Network ".parse::<ModelKind>().unwrap(), ModelKind::Network);
        assert!("resnet".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ModelKind::Network.to_string(),
            "This is the base class for all networks we will use"
        );
        assert_eq!(ModelKind::Dummy.build(None).unwrap().to_string(), "A dummy machine");
    }

    #[test]
    fn test_restore_from_record() {
        let record = PersistedModelRecord::new(ModelSnapshot::Dummy {
            model_name: "restored".to_string(),
        });
        let model = record.into_model().unwrap();
        assert_eq!(model.model_name(), "restored");
        assert_eq!(model.forward("anything"), 60);
    }
}
