//! Domain types for the metro trip planner.
//!
//! This module contains the validated network model: identifiers,
//! stations, lines, and the per-station tables that drive boarding
//! guidance. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod boarding;
mod error;
mod id;
mod line;
mod network;
mod station;

pub use boarding::{BoardingInfo, BoardingPosition};
pub use error::DomainError;
pub use id::{InvalidId, LineId, StationId};
pub use line::Line;
pub use network::Network;
pub use station::{Exit, OptimalBoarding, PathfindingTransfer, Station, Transfer};
