//! The read-only metro network.
//!
//! A `Network` owns every [`Station`] and [`Line`] and resolves the id
//! references between them. It is built once at startup and shared
//! read-only by every query.

use std::collections::HashMap;

use super::{BoardingInfo, DomainError, Line, LineId, OptimalBoarding, Station, StationId};

/// Stations and lines with their cross-references checked.
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    station_index: HashMap<StationId, usize>,
    line_index: HashMap<LineId, usize>,
}

impl Network {
    /// Assemble a network, checking that every referenced id exists.
    ///
    /// Membership is not required to be symmetric: a station may list a line
    /// whose station order omits it. The graph builder tolerates that.
    pub fn new(lines: Vec<Line>, stations: Vec<Station>) -> Result<Self, DomainError> {
        let mut line_index = HashMap::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            if line_index.insert(line.id.clone(), idx).is_some() {
                return Err(DomainError::DuplicateLine(line.id.clone()));
            }
        }

        let mut station_index = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            if station_index.insert(station.id.clone(), idx).is_some() {
                return Err(DomainError::DuplicateStation(station.id.clone()));
            }
        }

        let network = Self {
            stations,
            lines,
            station_index,
            line_index,
        };
        network.check_references()?;
        Ok(network)
    }

    fn check_references(&self) -> Result<(), DomainError> {
        for line in &self.lines {
            if line.stations.is_empty() {
                return Err(DomainError::EmptyLine(line.id.clone()));
            }
            let context = format!("line {}", line.id);
            for station in &line.stations {
                self.require_station(&context, station)?;
            }
        }

        for station in &self.stations {
            if station.lines.is_empty() {
                return Err(DomainError::StationWithoutLines(station.id.clone()));
            }

            let context = format!("station {}", station.id);
            for line in &station.lines {
                self.require_line(&context, line)?;
            }

            for exit in &station.exits {
                let context = format!("exit {} at {}", exit.id, station.id);
                if let Some(line) = &exit.line {
                    self.require_line(&context, line)?;
                }
                if let Some(OptimalBoarding::Towards(towards)) = &exit.optimal_boarding {
                    self.require_station(&context, towards)?;
                }
                for (towards, info) in exit.boarding.iter().flatten() {
                    self.require_station(&context, towards)?;
                    check_door(&context, info)?;
                }
            }

            for transfer in &station.transfers {
                let context = format!("transfer {} to {} at {}", transfer.from, transfer.to, station.id);
                self.require_line(&context, &transfer.from)?;
                self.require_line(&context, &transfer.to)?;
                for s in [&transfer.from_direction, &transfer.to_direction]
                    .into_iter()
                    .flatten()
                {
                    self.require_station(&context, s)?;
                }
                if let Some(OptimalBoarding::Towards(towards)) = &transfer.optimal_boarding {
                    self.require_station(&context, towards)?;
                }
            }

            for transfer in &station.pathfinding_transfers {
                let context = format!(
                    "pathfinding transfer {} to {} at {}",
                    transfer.from_line, transfer.to_line, station.id
                );
                self.require_line(&context, &transfer.from_line)?;
                self.require_line(&context, &transfer.to_line)?;
                self.require_station(&context, &transfer.from_direction)?;
                self.require_station(&context, &transfer.to_direction)?;
                for info in transfer
                    .boarding
                    .iter()
                    .flat_map(|m| m.values())
                    .chain(transfer.single_boarding.iter())
                {
                    check_door(&context, info)?;
                }
            }
        }

        Ok(())
    }

    fn require_station(&self, context: &str, id: &StationId) -> Result<(), DomainError> {
        if self.station_index.contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::UnknownStation {
                context: context.to_string(),
                station: id.clone(),
            })
        }
    }

    fn require_line(&self, context: &str, id: &LineId) -> Result<(), DomainError> {
        if self.line_index.contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::UnknownLine {
                context: context.to_string(),
                line: id.clone(),
            })
        }
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.station_index.get(id).map(|&idx| &self.stations[idx])
    }

    /// Look up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.line_index.get(id).map(|&idx| &self.lines[idx])
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in load order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines serving `station`, in the station's own order.
    pub fn lines_of<'a>(&'a self, station: &'a Station) -> impl Iterator<Item = &'a Line> + 'a {
        station.lines.iter().filter_map(|id| self.line(id))
    }
}

fn check_door(context: &str, info: &BoardingInfo) -> Result<(), DomainError> {
    match info.door {
        Some(door) if !(1..=4).contains(&door) => Err(DomainError::InvalidDoor {
            context: context.to_string(),
            door,
        }),
        _ => Ok(()),
    }
}
