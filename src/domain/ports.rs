use crate::domain::model::{ModelSnapshot, OverwritePolicy, PersistedModelRecord};
use crate::utils::error::Result;
use std::path::PathBuf;

/// A unit of a network acting on a generic `Input`.
///
/// Generic `Input` lets one variant accept several input types; the
/// placeholder accepts every type.
pub trait Module<Input> {
    type Output;

    fn forward(&self, input: Input) -> Self::Output;
}

/// The persistence half of the capability set, plus the descriptive name.
pub trait Network {
    fn model_name(&self) -> &str;

    fn snapshot(&self) -> ModelSnapshot;

    /// Each variant knows what it needs to save itself. `data` carries
    /// optional extra state the variant may choose to persist.
    fn save_model(
        &self,
        store: &dyn ModelStore,
        data: Option<&serde_json::Value>,
    ) -> Result<PathBuf>;
}

/// Where persisted records live.
pub trait ModelStore {
    /// Saves under the record's own model name.
    fn save_record(&self, record: &PersistedModelRecord) -> Result<PathBuf>;

    fn load_record(&self, model_name: &str) -> Result<PersistedModelRecord>;

    fn record_path(&self, model_name: &str) -> PathBuf;
}

/// Settings a store is built from; implemented by every config source.
pub trait StoreSettings {
    fn models_dir(&self) -> &str;
    fn extension(&self) -> &str;
    fn overwrite_policy(&self) -> OverwritePolicy;
}
