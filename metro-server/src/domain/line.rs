//! Metro line type.

use super::{LineId, StationId};

/// A metro line. The station order is the geographic order of travel.
#[derive(Debug, Clone)]
pub struct Line {
    pub id: LineId,
    /// Short code such as `1` or `A`.
    pub code: String,
    pub name: String,
    pub color: String,
    pub text_color: String,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Create a line with the given station order and no display colours.
    pub fn new(id: LineId, code: impl Into<String>, name: impl Into<String>, stations: Vec<StationId>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            color: String::new(),
            text_color: String::new(),
            stations,
        }
    }

    /// Index of `station` along the line.
    pub fn position(&self, station: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Returns true if the line calls at `station`.
    pub fn contains(&self, station: &StationId) -> bool {
        self.stations.contains(station)
    }

    /// Terminal station reached when riding from `from` to `to`.
    ///
    /// Moving up the station order heads to the last station, moving down
    /// heads to the first. Returns `None` if either station is not on the
    /// line or they are the same station.
    pub fn towards(&self, from: &StationId, to: &StationId) -> Option<&StationId> {
        let from_idx = self.position(from)?;
        let to_idx = self.position(to)?;

        if to_idx > from_idx {
            self.stations.last()
        } else if to_idx < from_idx {
            self.stations.first()
        } else {
            None
        }
    }

    /// Consecutive station pairs along the line.
    pub fn segments(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}
