//! Network dataset loading.
//!
//! The network is read once at startup from two JSON files and validated
//! into a [`Network`](crate::domain::Network).

mod error;
mod loader;
mod records;

pub use error::DatasetError;
pub use loader::{
    DatasetConfig, LINES_FILE, STATIONS_FILE, load_network, network_from_json,
    network_from_records,
};
pub use records::{
    ExitRecord, LineRecord, PathfindingRecord, PathfindingTransferRecord, StationRecord,
    TransferRecord,
};
