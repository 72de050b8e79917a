//! Boarding guidance for each step of a trip.
//!
//! Where to stand while riding depends on what happens at the *next*
//! action: the best car to ride in is the one nearest the stairs you will
//! need when you get off. So guidance is resolved back to front. The exit
//! is resolved first from the station's exit records, then each earlier
//! step inherits its riding position from the step after it, and each
//! transfer works out where to board the next train from the station's
//! transfer table.

use tracing::trace;

use super::config::PlannerConfig;
use super::error::PlanError;
use super::steps::Step;
use crate::domain::{BoardingInfo, BoardingPosition, Line, OptimalBoarding, Station};

/// A step with its boarding guidance resolved.
///
/// `boarding` is where to stand while riding after this action. `exiting`
/// is where the rider ends up when this action happens.
#[derive(Debug, Clone, Copy)]
pub enum AnnotatedStep<'a> {
    Start {
        station: &'a Station,
        line: &'a Line,
        towards: &'a Station,
        boarding: BoardingInfo,
    },
    Transfer {
        station: &'a Station,
        from_line: &'a Line,
        to_line: &'a Line,
        from_direction: &'a Station,
        to_direction: &'a Station,
        boarding: BoardingInfo,
        exiting: BoardingInfo,
    },
    Exit {
        station: &'a Station,
        towards: Option<&'a Station>,
        exiting: BoardingInfo,
    },
}

impl<'a> AnnotatedStep<'a> {
    /// The station where this action happens.
    pub fn station(&self) -> &'a Station {
        match *self {
            AnnotatedStep::Start { station, .. } => station,
            AnnotatedStep::Transfer { station, .. } => station,
            AnnotatedStep::Exit { station, .. } => station,
        }
    }

    /// Guidance for riding towards the next action.
    pub fn boarding(&self) -> Option<BoardingInfo> {
        match *self {
            AnnotatedStep::Start { boarding, .. } => Some(boarding),
            AnnotatedStep::Transfer { boarding, .. } => Some(boarding),
            AnnotatedStep::Exit { .. } => None,
        }
    }

    /// Guidance at the moment of arriving at this action.
    pub fn exiting(&self) -> Option<BoardingInfo> {
        match *self {
            AnnotatedStep::Start { .. } => None,
            AnnotatedStep::Transfer { exiting, .. } => Some(exiting),
            AnnotatedStep::Exit { exiting, .. } => Some(exiting),
        }
    }

    /// The instruction sentence for this step.
    pub fn instruction(&self) -> String {
        match *self {
            AnnotatedStep::Start {
                station,
                line,
                towards,
                ..
            } => format!(
                "Start at {} on line {} towards {}",
                station.name, line.code, towards.name
            ),
            AnnotatedStep::Transfer {
                station,
                to_line,
                to_direction,
                ..
            } => format!(
                "Transfer to line {} towards {} at {}",
                to_line.code, to_direction.name, station.name
            ),
            AnnotatedStep::Exit { station, .. } => format!("Exit at {}", station.name),
        }
    }

    /// Where to board the train taken after this step, as a sentence.
    pub fn guidance(&self) -> Option<String> {
        let info = match *self {
            AnnotatedStep::Start { boarding, .. } => boarding,
            AnnotatedStep::Transfer { exiting, .. } => exiting,
            AnnotatedStep::Exit { .. } => return None,
        };
        info.describe().map(|place| format!("Board at {place}"))
    }
}

/// Resolve the position implied by an exit's optimal boarding reference.
fn position_from_optimal(
    optimal: &OptimalBoarding,
    towards: &Station,
    config: &PlannerConfig,
) -> BoardingPosition {
    match optimal {
        OptimalBoarding::Towards(id) if *id == towards.id => BoardingPosition::Front,
        OptimalBoarding::Middle => BoardingPosition::Middle,
        OptimalBoarding::Towards(_) => config.unmatched_exit_position,
    }
}

/// Guidance for leaving the network at `station`.
///
/// `arrival` is the direction of the train the rider arrives on, as set by
/// the preceding step.
fn resolve_exit(
    station: &Station,
    towards: Option<&Station>,
    arrival: Option<&Station>,
    config: &PlannerConfig,
) -> BoardingInfo {
    let Some(towards) = towards else {
        return BoardingInfo::none();
    };
    if station.exits.is_empty() {
        return BoardingInfo::none();
    }

    let exit = if station.is_interchange() {
        arrival.and_then(|arrival| {
            station.exits.iter().find(|exit| {
                exit.optimal_boarding
                    .as_ref()
                    .is_some_and(|ob| ob.is_towards(&arrival.id))
            })
        })
    } else {
        station.exits.first()
    };

    let Some(exit) = exit else {
        return BoardingInfo::none();
    };

    match (&exit.boarding, &exit.optimal_boarding) {
        (None, None) => BoardingInfo::none(),
        (None, Some(optimal)) => BoardingInfo::at(position_from_optimal(optimal, towards, config)),
        (Some(by_direction), _) => by_direction
            .get(&towards.id)
            .copied()
            .unwrap_or_else(BoardingInfo::none),
    }
}

/// Guidance for boarding the next train at a transfer.
///
/// `next_position` is where the rider needs to be when the next train
/// arrives at its own transfer or exit.
fn resolve_transfer(
    station: &Station,
    from_line: &Line,
    to_line: &Line,
    from_direction: &Station,
    to_direction: &Station,
    next_position: BoardingPosition,
) -> BoardingInfo {
    let Some(transfer) = station.find_transfer(
        &from_line.id,
        &to_line.id,
        &from_direction.id,
        &to_direction.id,
    ) else {
        return BoardingInfo::none();
    };

    let info = match (&transfer.boarding, &transfer.single_boarding) {
        (Some(by_position), _) => by_position
            .get(&next_position)
            .copied()
            .unwrap_or_else(BoardingInfo::none),
        (None, Some(single)) => *single,
        (None, None) => BoardingInfo::none(),
    };
    info.with_opposite_doors(transfer.opposite_doors)
}

/// Attach boarding guidance to every step.
///
/// Steps are processed from last to first. Each `Start` and `Transfer`
/// takes its `boarding` from the already-resolved `exiting` of the step
/// after it, so the order of iteration matters.
pub fn add_boarding<'a>(
    steps: &[Step<'a>],
    config: &PlannerConfig,
) -> Result<Vec<AnnotatedStep<'a>>, PlanError> {
    let count = steps.len();
    let mut resolved: Vec<AnnotatedStep<'a>> = Vec::with_capacity(count);

    for (index, step) in steps.iter().enumerate().rev() {
        // The step after this one; `resolved` is built in reverse.
        let successor_exiting = resolved.last().and_then(AnnotatedStep::exiting);

        let annotated = match *step {
            Step::Exit { station, towards } => {
                let exiting = if count == 1 {
                    BoardingInfo::none()
                } else if index != count - 1 {
                    return Err(PlanError::ExitNotLast { index });
                } else {
                    let arrival = index
                        .checked_sub(1)
                        .and_then(|prev| steps[prev].departing_towards());
                    resolve_exit(station, towards, arrival, config)
                };
                AnnotatedStep::Exit {
                    station,
                    towards,
                    exiting,
                }
            }
            Step::Transfer {
                station,
                from_line,
                to_line,
                from_direction,
                to_direction,
            } => {
                if index == 0 || index == count - 1 {
                    return Err(PlanError::TransferAtBoundary { index });
                }
                let boarding = successor_exiting.ok_or(PlanError::UnresolvedSuccessor { index })?;
                let exiting = resolve_transfer(
                    station,
                    from_line,
                    to_line,
                    from_direction,
                    to_direction,
                    boarding.position,
                );
                AnnotatedStep::Transfer {
                    station,
                    from_line,
                    to_line,
                    from_direction,
                    to_direction,
                    boarding,
                    exiting,
                }
            }
            Step::Start {
                station,
                line,
                towards,
            } => {
                if index != 0 {
                    return Err(PlanError::StartNotFirst { index });
                }
                let boarding = successor_exiting.ok_or(PlanError::UnresolvedSuccessor { index })?;
                AnnotatedStep::Start {
                    station,
                    line,
                    towards,
                    boarding,
                }
            }
        };

        trace!(
            index,
            station = %annotated.station().id,
            boarding = ?annotated.boarding(),
            exiting = ?annotated.exiting(),
            "Resolved boarding"
        );
        resolved.push(annotated);
    }

    resolved.reverse();
    Ok(resolved)
}
