// Domain layer: model snapshots, persisted records and the ports (traits) variants implement.

pub mod model;
pub mod ports;
