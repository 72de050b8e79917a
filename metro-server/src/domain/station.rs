//! Station records and the per-station lookup tables used for boarding guidance.

use std::collections::HashMap;

use super::{BoardingInfo, BoardingPosition, LineId, StationId};

/// Where an exit's optimal boarding points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimalBoarding {
    /// Stand at the end of the train nearest the given direction-defining station.
    Towards(StationId),
    /// Stand in the middle of the train.
    Middle,
}

impl OptimalBoarding {
    /// Returns true if this points towards `station`.
    pub fn is_towards(&self, station: &StationId) -> bool {
        matches!(self, OptimalBoarding::Towards(id) if id == station)
    }
}

/// An egress point of a station.
#[derive(Debug, Clone)]
pub struct Exit {
    pub id: String,
    pub name: String,
    /// Line this exit belongs to, for multi-line stations with line-specific exits.
    pub line: Option<LineId>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub optimal_boarding: Option<OptimalBoarding>,
    /// Explicit guidance keyed by the direction the rider arrives from.
    pub boarding: Option<HashMap<StationId, BoardingInfo>>,
}

/// A display-only transfer note. Not used by the planner.
#[derive(Debug, Clone)]
pub struct Transfer {
    pub from: LineId,
    pub to: LineId,
    pub from_direction: Option<StationId>,
    pub to_direction: Option<StationId>,
    pub optimal_boarding: Option<OptimalBoarding>,
    pub description: Option<String>,
}

/// Transfer guidance consumed by the boarding resolver.
///
/// Identified by the ordered tuple of lines and direction stations. Either
/// `boarding` (keyed by where the rider will need to be on the next train)
/// or `single_boarding` (unconditional) supplies the answer.
#[derive(Debug, Clone)]
pub struct PathfindingTransfer {
    pub from_line: LineId,
    pub to_line: LineId,
    pub from_direction: StationId,
    pub to_direction: StationId,
    pub boarding: Option<HashMap<BoardingPosition, BoardingInfo>>,
    pub single_boarding: Option<BoardingInfo>,
    pub opposite_doors: Option<bool>,
}

impl PathfindingTransfer {
    /// Returns true if this record describes the given transfer.
    pub fn matches(
        &self,
        from_line: &LineId,
        to_line: &LineId,
        from_direction: &StationId,
        to_direction: &StationId,
    ) -> bool {
        &self.from_line == from_line
            && &self.to_line == to_line
            && &self.from_direction == from_direction
            && &self.to_direction == to_direction
    }
}

/// A station in the network. Immutable after load.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Lines serving this station, in display order.
    pub lines: Vec<LineId>,
    pub exits: Vec<Exit>,
    pub transfers: Vec<Transfer>,
    pub pathfinding_transfers: Vec<PathfindingTransfer>,
    pub stm_id: Option<String>,
    pub accessible: Option<bool>,
    pub parking: Option<bool>,
}

impl Station {
    /// Create a station with no exits or transfer data.
    pub fn new(id: StationId, name: impl Into<String>, lines: Vec<LineId>) -> Self {
        Self {
            id,
            name: name.into(),
            lines,
            exits: Vec::new(),
            transfers: Vec::new(),
            pathfinding_transfers: Vec::new(),
            stm_id: None,
            accessible: None,
            parking: None,
        }
    }

    /// Returns true if more than one line serves this station.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    /// Find the pathfinding transfer record for an exact transfer.
    pub fn find_transfer(
        &self,
        from_line: &LineId,
        to_line: &LineId,
        from_direction: &StationId,
        to_direction: &StationId,
    ) -> Option<&PathfindingTransfer> {
        self.pathfinding_transfers
            .iter()
            .find(|t| t.matches(from_line, to_line, from_direction, to_direction))
    }
}
