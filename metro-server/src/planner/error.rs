//! Planner error types.
//!
//! Every variant is an internal fault: a path or step list that could not
//! have come from a well-formed network. "No route" is not an error; it is
//! reported as `None` by the search.

use crate::domain::{LineId, StationId};

/// Invariant violation while turning a path into annotated steps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Two consecutive path stations share no line
    #[error("no line connects {from} to {to}")]
    NoConnectingLine { from: StationId, to: StationId },

    /// The direction of travel could not be determined
    #[error("cannot determine direction on line {line} from {from} to {to}")]
    NoTowardsStation {
        line: LineId,
        from: StationId,
        to: StationId,
    },

    /// An exit step appeared before the end of the trip
    #[error("exit must be the last step (found at step {index})")]
    ExitNotLast { index: usize },

    /// A transfer step appeared at the start or end of the trip
    #[error("transfer cannot be the first or last step (found at step {index})")]
    TransferAtBoundary { index: usize },

    /// A start step appeared after the beginning of the trip
    #[error("start must be the first step (found at step {index})")]
    StartNotFirst { index: usize },

    /// The step after this one has no alighting guidance to inherit
    #[error("step {index} must be followed by a resolved transfer or exit")]
    UnresolvedSuccessor { index: usize },
}
