//! Domain error types.
//!
//! These errors represent referential-integrity failures found while
//! assembling a [`Network`](super::Network). They are distinct from I/O and
//! parse errors.

use super::{LineId, StationId};

/// Domain-level errors for network assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Two stations share an id
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate line id: {0}")]
    DuplicateLine(LineId),

    /// A line has no stations
    #[error("line {0} has no stations")]
    EmptyLine(LineId),

    /// A station has no lines
    #[error("station {0} is not served by any line")]
    StationWithoutLines(StationId),

    /// A reference to a line that does not exist
    #[error("{context} refers to unknown line {line}")]
    UnknownLine { context: String, line: LineId },

    /// A reference to a station that does not exist
    #[error("{context} refers to unknown station {station}")]
    UnknownStation { context: String, station: StationId },

    /// Door numbers run from 1 to 4
    #[error("{context} has door {door}, expected 1 to 4")]
    InvalidDoor { context: String, door: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::DuplicateStation(StationId::parse("atwater").unwrap());
        assert_eq!(err.to_string(), "duplicate station id: atwater");

        let err = DomainError::EmptyLine(LineId::parse("yellow").unwrap());
        assert_eq!(err.to_string(), "line yellow has no stations");

        let err = DomainError::UnknownLine {
            context: "station atwater".into(),
            line: LineId::parse("purple").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "station atwater refers to unknown line purple"
        );

        let err = DomainError::UnknownStation {
            context: "line green".into(),
            station: StationId::parse("nowhere").unwrap(),
        };
        assert_eq!(err.to_string(), "line green refers to unknown station nowhere");

        let err = DomainError::InvalidDoor {
            context: "exit main at atwater".into(),
            door: 7,
        };
        assert_eq!(err.to_string(), "exit main at atwater has door 7, expected 1 to 4");
    }
}
