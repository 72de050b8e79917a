//! Planner configuration.

use crate::domain::BoardingPosition;

/// Tunable constants for graph construction and boarding inference.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Weight of riding between two adjacent stops on one line.
    pub ride_weight: u32,

    /// Weight of stepping between a line platform and the bare station node.
    pub platform_weight: u32,

    /// Weight of a direct line-to-line transfer edge.
    /// Kept large relative to `ride_weight` to discourage needless changes.
    pub transfer_weight: u32,

    /// Position assumed when an exit's optimal boarding names a station
    /// other than the direction of travel.
    ///
    /// Unverified against physical layouts: the exit is assumed to sit at
    /// the opposite end of the train.
    pub unmatched_exit_position: BoardingPosition,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        ride_weight: u32,
        platform_weight: u32,
        transfer_weight: u32,
        unmatched_exit_position: BoardingPosition,
    ) -> Self {
        Self {
            ride_weight,
            platform_weight,
            transfer_weight,
            unmatched_exit_position,
        }
    }

    /// Returns a copy with a different transfer weight.
    pub fn with_transfer_weight(self, transfer_weight: u32) -> Self {
        Self {
            transfer_weight,
            ..self
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ride_weight: 1,
            platform_weight: 1,
            transfer_weight: 100,
            unmatched_exit_position: BoardingPosition::Back,
        }
    }
}
