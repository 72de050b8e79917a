//! Path decomposition into rider actions.
//!
//! A path is a plain sequence of stations. The rider only cares about the
//! points where something happens: boarding the first train, changing
//! lines, and getting off. [`to_steps`] walks the path once, forward, and
//! emits one [`Step`] per such point.

use tracing::trace;

use super::error::PlanError;
use crate::domain::{Line, Network, Station};

/// One action of a trip.
///
/// A well-formed sequence is one `Start`, any number of `Transfer`s and a
/// final `Exit`. A trip that begins and ends at the same station is a lone
/// `Exit` with no direction.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Board `line` at `station`, heading for `towards`.
    Start {
        station: &'a Station,
        line: &'a Line,
        towards: &'a Station,
    },
    /// Change from `from_line` to `to_line` at `station`.
    Transfer {
        station: &'a Station,
        from_line: &'a Line,
        to_line: &'a Line,
        from_direction: &'a Station,
        to_direction: &'a Station,
    },
    /// Leave the network at `station`, arriving in direction `towards`.
    Exit {
        station: &'a Station,
        towards: Option<&'a Station>,
    },
}

impl<'a> Step<'a> {
    /// The station where this action happens.
    pub fn station(&self) -> &'a Station {
        match *self {
            Step::Start { station, .. } => station,
            Step::Transfer { station, .. } => station,
            Step::Exit { station, .. } => station,
        }
    }

    /// Direction of travel after this action, if the rider is still riding.
    pub fn departing_towards(&self) -> Option<&'a Station> {
        match *self {
            Step::Start { towards, .. } => Some(towards),
            Step::Transfer { to_direction, .. } => Some(to_direction),
            Step::Exit { .. } => None,
        }
    }
}

/// Line serving both `station` and `next`, chosen in `station`'s line order.
fn connecting_line<'a>(
    network: &'a Network,
    station: &'a Station,
    next: &Station,
) -> Option<&'a Line> {
    network
        .lines_of(station)
        .find(|line| line.contains(&station.id) && line.contains(&next.id))
}

/// Determine the line and direction for riding from `station` to `next`.
fn ride<'a>(
    network: &'a Network,
    station: &'a Station,
    next: &Station,
) -> Result<(&'a Line, &'a Station), PlanError> {
    let line = connecting_line(network, station, next).ok_or_else(|| PlanError::NoConnectingLine {
        from: station.id.clone(),
        to: next.id.clone(),
    })?;

    let towards = line
        .towards(&station.id, &next.id)
        .and_then(|id| network.station(id))
        .ok_or_else(|| PlanError::NoTowardsStation {
            line: line.id.clone(),
            from: station.id.clone(),
            to: next.id.clone(),
        })?;

    Ok((line, towards))
}

/// Convert a station path into the sequence of rider actions.
///
/// Deterministic from the path alone. An empty path yields no steps.
pub fn to_steps<'a>(network: &'a Network, path: &[&'a Station]) -> Result<Vec<Step<'a>>, PlanError> {
    let Some((&first, rest)) = path.split_first() else {
        return Ok(Vec::new());
    };

    let Some(&second) = rest.first() else {
        return Ok(vec![Step::Exit {
            station: first,
            towards: None,
        }]);
    };

    let (mut line, mut towards) = ride(network, first, second)?;
    let mut steps = vec![Step::Start {
        station: first,
        line,
        towards,
    }];

    for pair in path.windows(2).skip(1) {
        let (station, next) = (pair[0], pair[1]);

        if line.contains(&next.id) {
            continue;
        }

        let (new_line, new_towards) = ride(network, station, next)?;
        trace!(
            station = %station.id,
            from = %line.id,
            to = %new_line.id,
            "Transfer"
        );

        steps.push(Step::Transfer {
            station,
            from_line: line,
            to_line: new_line,
            from_direction: towards,
            to_direction: new_towards,
        });
        line = new_line;
        towards = new_towards;
    }

    // Path has at least two stations here.
    let last = path[path.len() - 1];
    steps.push(Step::Exit {
        station: last,
        towards: Some(towards),
    });

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn lid(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    /// Line l1: s1 - s2 - s3 - s4
    /// Line l2: u1 - s3 - u2
    fn network() -> Network {
        let lines = vec![
            Line::new(lid("l1"), "1", "One", ["s1", "s2", "s3", "s4"].map(sid).to_vec()),
            Line::new(lid("l2"), "2", "Two", ["u1", "s3", "u2"].map(sid).to_vec()),
        ];
        let stations = vec![
            Station::new(sid("s1"), "S1", vec![lid("l1")]),
            Station::new(sid("s2"), "S2", vec![lid("l1")]),
            Station::new(sid("s3"), "S3", vec![lid("l1"), lid("l2")]),
            Station::new(sid("s4"), "S4", vec![lid("l1")]),
            Station::new(sid("u1"), "U1", vec![lid("l2")]),
            Station::new(sid("u2"), "U2", vec![lid("l2")]),
        ];
        Network::new(lines, stations).unwrap()
    }

    fn path<'a>(network: &'a Network, ids: &[&str]) -> Vec<&'a Station> {
        ids.iter().map(|id| network.station(&sid(id)).unwrap()).collect()
    }

    #[test]
    fn empty_path() {
        let network = network();
        assert!(to_steps(&network, &[]).unwrap().is_empty());
    }

    #[test]
    fn single_station_is_lone_exit() {
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s2"])).unwrap();

        assert_eq!(steps.len(), 1);
        match steps[0] {
            Step::Exit { station, towards } => {
                assert_eq!(station.id, sid("s2"));
                assert!(towards.is_none());
            }
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn same_line_ascending() {
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s1", "s2", "s3", "s4"])).unwrap();

        assert_eq!(steps.len(), 2);
        match steps[0] {
            Step::Start {
                station,
                line,
                towards,
            } => {
                assert_eq!(station.id, sid("s1"));
                assert_eq!(line.id, lid("l1"));
                assert_eq!(towards.id, sid("s4"));
            }
            other => panic!("expected start, got {other:?}"),
        }
        match steps[1] {
            Step::Exit { station, towards } => {
                assert_eq!(station.id, sid("s4"));
                assert_eq!(towards.map(|t| &t.id), Some(&sid("s4")));
            }
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn same_line_descending_heads_to_first_station() {
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s3", "s2"])).unwrap();

        match steps[0] {
            Step::Start { towards, .. } => assert_eq!(towards.id, sid("s1")),
            other => panic!("expected start, got {other:?}"),
        }
    }

    #[test]
    fn transfer_between_lines() {
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s1", "s2", "s3", "u2"])).unwrap();

        assert_eq!(steps.len(), 3);
        match steps[1] {
            Step::Transfer {
                station,
                from_line,
                to_line,
                from_direction,
                to_direction,
            } => {
                assert_eq!(station.id, sid("s3"));
                assert_eq!(from_line.id, lid("l1"));
                assert_eq!(to_line.id, lid("l2"));
                assert_eq!(from_direction.id, sid("s4"));
                assert_eq!(to_direction.id, sid("u2"));
            }
            other => panic!("expected transfer, got {other:?}"),
        }
        match steps[2] {
            Step::Exit { station, towards } => {
                assert_eq!(station.id, sid("u2"));
                assert_eq!(towards.map(|t| &t.id), Some(&sid("u2")));
            }
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn transfer_from_start_station() {
        // Starting at the interchange itself on the second line.
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s3", "u1"])).unwrap();

        assert_eq!(steps.len(), 2);
        match steps[0] {
            Step::Start { line, towards, .. } => {
                assert_eq!(line.id, lid("l2"));
                assert_eq!(towards.id, sid("u1"));
            }
            other => panic!("expected start, got {other:?}"),
        }
    }

    #[test]
    fn disconnected_stations_are_an_error() {
        let network = network();
        let err = to_steps(&network, &path(&network, &["s1", "u1"])).unwrap_err();
        assert_eq!(
            err,
            PlanError::NoConnectingLine {
                from: sid("s1"),
                to: sid("u1"),
            }
        );

        let err = to_steps(&network, &path(&network, &["s1", "s2", "u1"])).unwrap_err();
        assert!(matches!(err, PlanError::NoConnectingLine { .. }));
    }

    #[test]
    fn repeated_station_has_no_direction() {
        let network = network();
        let err = to_steps(&network, &path(&network, &["s1", "s1"])).unwrap_err();
        assert!(matches!(err, PlanError::NoTowardsStation { .. }));
    }

    #[test]
    fn departing_towards() {
        let network = network();
        let steps = to_steps(&network, &path(&network, &["s1", "s3", "u1"])).unwrap();

        let towards: Vec<_> = steps
            .iter()
            .map(|s| s.departing_towards().map(|t| t.id.as_str()))
            .collect();
        assert_eq!(towards, vec![Some("s4"), Some("u1"), None]);
        assert_eq!(steps[1].station().id, sid("s3"));
    }
}
