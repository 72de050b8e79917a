//! Boarding guidance types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where along the train a rider should stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardingPosition {
    Front,
    Middle,
    Back,
    /// No guidance available.
    None,
}

impl BoardingPosition {
    /// Parse a position keyword (`front`, `middle`, `back`, `none`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "front" => Some(BoardingPosition::Front),
            "middle" => Some(BoardingPosition::Middle),
            "back" => Some(BoardingPosition::Back),
            "none" => Some(BoardingPosition::None),
            _ => None,
        }
    }

    /// Returns the keyword for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardingPosition::Front => "front",
            BoardingPosition::Middle => "middle",
            BoardingPosition::Back => "back",
            BoardingPosition::None => "none",
        }
    }
}

impl fmt::Display for BoardingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boarding or alighting guidance for one action of a trip.
///
/// `car` counts from the front when positive and from the rear when
/// negative. `door` is numbered 1 to 4 within the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingInfo {
    pub position: BoardingPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite_doors: Option<bool>,
}

impl BoardingInfo {
    /// Guidance with only a position set.
    pub fn at(position: BoardingPosition) -> Self {
        Self {
            position,
            car: None,
            door: None,
            opposite_doors: None,
        }
    }

    /// No guidance.
    pub fn none() -> Self {
        Self::at(BoardingPosition::None)
    }

    /// Returns a copy with the opposite-doors flag replaced.
    pub fn with_opposite_doors(self, opposite_doors: Option<bool>) -> Self {
        Self {
            opposite_doors,
            ..self
        }
    }

    /// True when this carries no position and no door hint.
    pub fn is_none(&self) -> bool {
        self.position == BoardingPosition::None && self.opposite_doors != Some(true)
    }

    /// Human-readable placement, e.g. `the front of the train, car 2, door 3`.
    ///
    /// Returns `None` when there is nothing useful to say.
    pub fn describe(&self) -> Option<String> {
        if self.is_none() {
            return None;
        }

        let mut parts = Vec::new();
        parts.push(match self.position {
            BoardingPosition::Front => "the front of the train".to_string(),
            BoardingPosition::Middle => "the middle of the train".to_string(),
            BoardingPosition::Back => "the back of the train".to_string(),
            BoardingPosition::None => "any car".to_string(),
        });

        if let Some(car) = self.car {
            if car < 0 {
                parts.push(format!("car {} from the back", car.unsigned_abs()));
            } else {
                parts.push(format!("car {car}"));
            }
        }
        if let Some(door) = self.door {
            parts.push(format!("door {door}"));
        }

        let mut text = parts.join(", ");
        if self.opposite_doors == Some(true) {
            text.push_str(" (doors open on the opposite side)");
        }
        Some(text)
    }
}

impl Default for BoardingInfo {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positions() {
        assert_eq!(BoardingPosition::parse("front"), Some(BoardingPosition::Front));
        assert_eq!(BoardingPosition::parse("middle"), Some(BoardingPosition::Middle));
        assert_eq!(BoardingPosition::parse("back"), Some(BoardingPosition::Back));
        assert_eq!(BoardingPosition::parse("none"), Some(BoardingPosition::None));
        assert_eq!(BoardingPosition::parse("Front"), None);
        assert_eq!(BoardingPosition::parse(""), None);
    }

    #[test]
    fn describe_position_only() {
        let info = BoardingInfo::at(BoardingPosition::Front);
        assert_eq!(info.describe().as_deref(), Some("the front of the train"));
    }

    #[test]
    fn describe_car_and_door() {
        let info = BoardingInfo {
            position: BoardingPosition::Back,
            car: Some(-2),
            door: Some(4),
            opposite_doors: Some(true),
        };
        assert_eq!(
            info.describe().as_deref(),
            Some("the back of the train, car 2 from the back, door 4 (doors open on the opposite side)")
        );
    }

    #[test]
    fn describe_none() {
        assert_eq!(BoardingInfo::none().describe(), None);

        let doors_only = BoardingInfo::none().with_opposite_doors(Some(true));
        assert!(!doors_only.is_none());
        assert_eq!(
            doors_only.describe().as_deref(),
            Some("any car (doors open on the opposite side)")
        );
    }

    #[test]
    fn with_opposite_doors_replaces_flag() {
        let info = BoardingInfo {
            position: BoardingPosition::Middle,
            car: Some(5),
            door: None,
            opposite_doors: Some(true),
        };
        let cleared = info.with_opposite_doors(None);
        assert_eq!(cleared.opposite_doors, None);
        assert_eq!(cleared.car, Some(5));
    }

    #[test]
    fn json_shape() {
        let info = BoardingInfo {
            position: BoardingPosition::Front,
            car: Some(1),
            door: None,
            opposite_doors: Some(false),
        };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "position": "front", "car": 1, "oppositeDoors": false })
        );

        let parsed: BoardingInfo =
            serde_json::from_str(r#"{ "position": "middle", "door": 2 }"#).unwrap();
        assert_eq!(parsed.position, BoardingPosition::Middle);
        assert_eq!(parsed.door, Some(2));
        assert_eq!(parsed.car, None);
    }
}
