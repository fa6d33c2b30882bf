pub mod dummy;
pub mod engine;
pub mod factory;

pub use crate::domain::model::{ModelSnapshot, OverwritePolicy, PersistedModelRecord};
pub use crate::domain::ports::{ModelStore, Module, Network, StoreSettings};
pub use crate::utils::error::Result;
