//! Load the network from `stations.json` and `lines.json`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::DatasetError;
use super::records::{
    ExitRecord, LineRecord, PathfindingTransferRecord, StationRecord, TransferRecord,
};
use crate::domain::{
    BoardingPosition, Exit, Line, LineId, Network, OptimalBoarding,
    PathfindingTransfer, Station, StationId, Transfer,
};

/// File name of the station records inside the data directory.
pub const STATIONS_FILE: &str = "stations.json";

/// File name of the line records inside the data directory.
pub const LINES_FILE: &str = "lines.json";

/// Configuration for dataset loading.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding `stations.json` and `lines.json`.
    pub dir: PathBuf,
    /// Value of an exit's `optimalBoarding` meaning "middle of the train"
    /// rather than a direction station.
    pub middle_sentinel: String,
}

impl DatasetConfig {
    /// Create a config reading from `dir` with the default middle sentinel.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            middle_sentinel: "middle".to_string(),
        }
    }

    /// Set a custom middle sentinel.
    pub fn with_middle_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.middle_sentinel = sentinel.into();
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Read and validate the network described by `config`.
pub fn load_network(config: &DatasetConfig) -> Result<Network, DatasetError> {
    let lines = read_file(&config.dir.join(LINES_FILE))?;
    let stations = read_file(&config.dir.join(STATIONS_FILE))?;
    let network = network_from_json(&lines, &stations, &config.middle_sentinel)?;

    info!(
        dir = %config.dir.display(),
        lines = network.lines().len(),
        stations = network.stations().len(),
        "Loaded network"
    );
    Ok(network)
}

fn read_file(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a network from the raw contents of `lines.json` and `stations.json`.
pub fn network_from_json(
    lines_json: &str,
    stations_json: &str,
    middle_sentinel: &str,
) -> Result<Network, DatasetError> {
    let lines: Vec<LineRecord> =
        serde_json::from_str(lines_json).map_err(|e| DatasetError::Json {
            file: LINES_FILE.to_string(),
            message: e.to_string(),
        })?;
    let stations: Vec<StationRecord> =
        serde_json::from_str(stations_json).map_err(|e| DatasetError::Json {
            file: STATIONS_FILE.to_string(),
            message: e.to_string(),
        })?;
    network_from_records(lines, stations, middle_sentinel)
}

/// Convert parsed records into a validated network.
pub fn network_from_records(
    lines: Vec<LineRecord>,
    stations: Vec<StationRecord>,
    middle_sentinel: &str,
) -> Result<Network, DatasetError> {
    let lines = lines
        .into_iter()
        .map(convert_line)
        .collect::<Result<Vec<_>, _>>()?;
    let stations = stations
        .into_iter()
        .map(|record| convert_station(record, middle_sentinel))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Network::new(lines, stations)?)
}

fn convert_line(record: LineRecord) -> Result<Line, DatasetError> {
    let stations = record
        .stations
        .iter()
        .map(|s| StationId::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line {
        id: LineId::parse(&record.id)?,
        code: record.code,
        name: record.name,
        color: record.color,
        text_color: record.text_color,
        stations,
    })
}

fn convert_station(record: StationRecord, middle_sentinel: &str) -> Result<Station, DatasetError> {
    let id = StationId::parse(&record.id)?;
    let lines = record
        .lines
        .iter()
        .map(|l| LineId::parse(l))
        .collect::<Result<Vec<_>, _>>()?;

    let exits = record
        .exits
        .into_iter()
        .map(|exit| convert_exit(exit, middle_sentinel))
        .collect::<Result<Vec<_>, _>>()?;

    let transfers = record
        .transfers
        .into_iter()
        .map(|transfer| convert_transfer(transfer, middle_sentinel))
        .collect::<Result<Vec<_>, _>>()?;

    let pathfinding_transfers = record
        .pathfinding
        .map(|p| p.transfers)
        .unwrap_or_default()
        .into_iter()
        .map(|t| convert_pathfinding_transfer(&id, t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Station {
        id,
        name: record.name,
        lines,
        exits,
        transfers,
        pathfinding_transfers,
        stm_id: record.stm_id,
        accessible: record.accessible,
        parking: record.parking,
    })
}

/// Resolve an `optimalBoarding` reference, which is a station id or the middle sentinel.
fn optimal_boarding(
    value: Option<&str>,
    middle_sentinel: &str,
) -> Result<Option<OptimalBoarding>, DatasetError> {
    Ok(match value {
        None => None,
        Some(s) if s == middle_sentinel => Some(OptimalBoarding::Middle),
        Some(s) => Some(OptimalBoarding::Towards(StationId::parse(s)?)),
    })
}

fn convert_exit(record: ExitRecord, middle_sentinel: &str) -> Result<Exit, DatasetError> {
    let optimal_boarding = optimal_boarding(record.optimal_boarding.as_deref(), middle_sentinel)?;

    let boarding = record
        .boarding
        .map(|map| {
            map.into_iter()
                .map(|(towards, info)| Ok((StationId::parse(&towards)?, info)))
                .collect::<Result<HashMap<_, _>, DatasetError>>()
        })
        .transpose()?;

    Ok(Exit {
        id: record.id,
        name: record.name,
        line: record.line.as_deref().map(LineId::parse).transpose()?,
        address: record.address,
        description: record.description,
        optimal_boarding,
        boarding,
    })
}

fn convert_transfer(record: TransferRecord, middle_sentinel: &str) -> Result<Transfer, DatasetError> {
    let station = |s: Option<String>| s.as_deref().map(StationId::parse).transpose();

    Ok(Transfer {
        from: LineId::parse(&record.from)?,
        to: LineId::parse(&record.to)?,
        from_direction: station(record.from_direction)?,
        to_direction: station(record.to_direction)?,
        optimal_boarding: optimal_boarding(record.optimal_boarding.as_deref(), middle_sentinel)?,
        description: record.description,
    })
}

fn convert_pathfinding_transfer(
    station: &StationId,
    record: PathfindingTransferRecord,
) -> Result<PathfindingTransfer, DatasetError> {
    let from_line = LineId::parse(&record.from_line)?;
    let to_line = LineId::parse(&record.to_line)?;

    let boarding = match record.boarding {
        Some(map) => {
            let mut converted = HashMap::with_capacity(map.len());
            for (key, info) in map {
                let position = parse_map_key(&key).ok_or_else(|| DatasetError::UnknownPosition {
                    context: format!("pathfinding transfer {from_line} to {to_line} at {station}"),
                    key,
                })?;
                converted.insert(position, info);
            }
            Some(converted)
        }
        None => None,
    };

    Ok(PathfindingTransfer {
        from_line,
        to_line,
        from_direction: StationId::parse(&record.from_direction)?,
        to_direction: StationId::parse(&record.to_direction)?,
        boarding,
        single_boarding: record.single_boarding,
        opposite_doors: record.opposite_doors,
    })
}

/// Boarding maps are keyed by where the rider needs to be next; `none` is not a place.
fn parse_map_key(key: &str) -> Option<BoardingPosition> {
    BoardingPosition::parse(key).filter(|p| *p != BoardingPosition::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use tempfile::tempdir;

    const LINES: &str = r##"[
        {
            "id": "green", "code": "1", "name": "Green", "color": "#00A650", "textColor": "#FFFFFF",
            "stations": ["angrignon", "lionel-groulx", "atwater"]
        },
        {
            "id": "orange", "code": "2", "name": "Orange", "color": "#F08123", "textColor": "#000000",
            "stations": ["cote-vertu", "lionel-groulx", "montmorency"]
        }
    ]"##;

    const STATIONS: &str = r#"[
        { "id": "angrignon", "name": "Angrignon", "lines": ["green"] },
        {
            "id": "atwater", "name": "Atwater", "lines": ["green"],
            "exits": [
                { "id": "a", "name": "Atwater Ave", "optimalBoarding": "middle" },
                {
                    "id": "b", "name": "Cabot", "optimalBoarding": "angrignon",
                    "boarding": { "atwater": { "position": "back", "car": -1, "door": 4 } }
                }
            ]
        },
        { "id": "cote-vertu", "name": "Côte-Vertu", "lines": ["orange"] },
        { "id": "montmorency", "name": "Montmorency", "lines": ["orange"] },
        {
            "id": "lionel-groulx", "name": "Lionel-Groulx", "lines": ["green", "orange"],
            "transfers": [{
                "from": "green", "to": "orange", "optimalBoarding": "middle",
                "description": "Cross the platform"
            }],
            "pathfinding": {
                "transfers": [{
                    "fromLine": "green", "toLine": "orange",
                    "fromDirection": "atwater", "toDirection": "montmorency",
                    "boarding": { "front": { "position": "back" }, "back": { "position": "front", "car": 1 } },
                    "oppositeDoors": true
                }]
            }
        }
    ]"#;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn default_config() {
        let config = DatasetConfig::default();
        assert_eq!(config.dir, PathBuf::from("data"));
        assert_eq!(config.middle_sentinel, "middle");
    }

    #[test]
    fn custom_config() {
        let config = DatasetConfig::new("/srv/metro").with_middle_sentinel("centre");
        assert_eq!(config.dir, PathBuf::from("/srv/metro"));
        assert_eq!(config.middle_sentinel, "centre");
    }

    #[test]
    fn parses_full_dataset() {
        let network = network_from_json(LINES, STATIONS, "middle").unwrap();

        assert_eq!(network.lines().len(), 2);
        assert_eq!(network.stations().len(), 5);

        let atwater = network.station(&sid("atwater")).unwrap();
        assert_eq!(atwater.exits[0].optimal_boarding, Some(OptimalBoarding::Middle));
        assert_eq!(
            atwater.exits[1].optimal_boarding,
            Some(OptimalBoarding::Towards(sid("angrignon")))
        );
        let info = atwater.exits[1].boarding.as_ref().unwrap()[&sid("atwater")];
        assert_eq!(info.position, BoardingPosition::Back);
        assert_eq!(info.car, Some(-1));

        let lg = network.station(&sid("lionel-groulx")).unwrap();
        assert_eq!(lg.transfers.len(), 1);
        assert_eq!(lg.transfers[0].optimal_boarding, Some(OptimalBoarding::Middle));
        let transfer = &lg.pathfinding_transfers[0];
        let map = transfer.boarding.as_ref().unwrap();
        assert_eq!(map[&BoardingPosition::Front].position, BoardingPosition::Back);
        assert_eq!(map[&BoardingPosition::Back].car, Some(1));
        assert_eq!(transfer.opposite_doors, Some(true));
    }

    #[test]
    fn custom_middle_sentinel() {
        // With another sentinel, "middle" is read as a station id and must resolve.
        let err = network_from_json(LINES, STATIONS, "centre").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Domain(DomainError::UnknownStation { .. })
        ));
    }

    #[test]
    fn rejects_unknown_boarding_key() {
        let stations = STATIONS.replace(r#""front": { "position": "back" }"#, r#""rear": { "position": "back" }"#);
        let err = network_from_json(LINES, &stations, "middle").unwrap_err();
        match err {
            DatasetError::UnknownPosition { key, .. } => assert_eq!(key, "rear"),
            other => panic!("expected unknown position, got {other:?}"),
        }
    }

    #[test]
    fn rejects_none_as_boarding_key() {
        let stations = STATIONS.replace(r#""front": { "position": "back" }"#, r#""none": { "position": "back" }"#);
        assert!(matches!(
            network_from_json(LINES, &stations, "middle"),
            Err(DatasetError::UnknownPosition { .. })
        ));
    }

    #[test]
    fn rejects_bad_door() {
        let stations = STATIONS.replace(r#""door": 4"#, r#""door": 7"#);
        let err = network_from_json(LINES, &stations, "middle").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Domain(DomainError::InvalidDoor { door: 7, .. })
        ));
    }

    #[test]
    fn rejects_unknown_line_reference() {
        let stations = STATIONS.replace(r#""lines": ["orange"] }"#, r#""lines": ["purple"] }"#);
        let err = network_from_json(LINES, &stations, "middle").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Domain(DomainError::UnknownLine { .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = network_from_json("[", STATIONS, "middle").unwrap_err();
        match err {
            DatasetError::Json { file, .. } => assert_eq!(file, LINES_FILE),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_id() {
        let lines = LINES.replace(r#""id": "green""#, r#""id": " ""#);
        assert!(matches!(
            network_from_json(&lines, STATIONS, "middle"),
            Err(DatasetError::InvalidId(_))
        ));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(LINES_FILE), LINES).unwrap();
        std::fs::write(dir.path().join(STATIONS_FILE), STATIONS).unwrap();

        let network = load_network(&DatasetConfig::new(dir.path())).unwrap();
        assert!(network.station(&sid("montmorency")).is_some());
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(LINES_FILE), LINES).unwrap();

        let err = load_network(&DatasetConfig::new(dir.path())).unwrap_err();
        match err {
            DatasetError::Io { path, .. } => assert_eq!(path, dir.path().join(STATIONS_FILE)),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
