//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{BoardingInfo, Line, Station};
use crate::planner::{AnnotatedStep, Plan};

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Partial name or id; empty matches everything
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub lines: Vec<String>,
    pub accessible: Option<bool>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line in responses.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub code: String,
    pub name: String,
    pub color: String,
    pub text_color: String,
    pub stations: Vec<String>,
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// One step of a planned trip.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// `start`, `transfer` or `exit`
    pub kind: &'static str,

    /// Station id where the step happens
    pub station: String,

    /// Station display name
    pub station_name: String,

    /// Line ridden after this step (start and transfer)
    pub line: Option<String>,

    /// Line ridden before this step (transfer only)
    pub from_line: Option<String>,

    /// Direction station of the train ridden after this step
    pub towards: Option<String>,

    /// Human-readable instruction
    pub instruction: String,

    /// Human-readable boarding advice, if any
    pub guidance: Option<String>,

    /// Where to stand while riding after this step
    pub boarding: Option<BoardingInfo>,

    /// Where the rider is when arriving at this step
    pub exiting: Option<BoardingInfo>,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited in order
    pub path: Vec<StationResult>,

    /// Rider actions with boarding guidance
    pub steps: Vec<StepResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            accessible: station.accessible,
        }
    }
}

impl LineResult {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            code: line.code.clone(),
            name: line.name.clone(),
            color: line.color.clone(),
            text_color: line.text_color.clone(),
            stations: line.stations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StepResult {
    /// Create from an annotated planner step.
    pub fn from_step(step: &AnnotatedStep<'_>) -> Self {
        let (kind, line, from_line, towards) = match *step {
            AnnotatedStep::Start { line, towards, .. } => {
                ("start", Some(line), None, Some(towards))
            }
            AnnotatedStep::Transfer {
                from_line,
                to_line,
                to_direction,
                ..
            } => ("transfer", Some(to_line), Some(from_line), Some(to_direction)),
            AnnotatedStep::Exit { .. } => ("exit", None, None, None),
        };
        let station = step.station();

        Self {
            kind,
            station: station.id.to_string(),
            station_name: station.name.clone(),
            line: line.map(|l| l.id.to_string()),
            from_line: from_line.map(|l| l.id.to_string()),
            towards: towards.map(|s| s.id.to_string()),
            instruction: step.instruction(),
            guidance: step.guidance(),
            boarding: step.boarding(),
            exiting: step.exiting(),
        }
    }
}

impl RouteResponse {
    /// Create from a planned trip.
    pub fn from_plan(plan: &Plan<'_>) -> Self {
        Self {
            path: plan
                .path
                .iter()
                .map(|s| StationResult::from_station(s))
                .collect(),
            steps: plan.steps.iter().map(StepResult::from_step).collect(),
        }
    }
}
