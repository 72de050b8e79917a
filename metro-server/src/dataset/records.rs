//! On-disk record shapes for `stations.json` and `lines.json`.
//!
//! These mirror the JSON exactly; references are still plain strings.
//! [`super::loader`] validates them and resolves them into domain types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::BoardingInfo;

/// A line as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub color: String,
    pub text_color: String,
    pub stations: Vec<String>,
}

/// An exit as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub optimal_boarding: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub boarding: Option<HashMap<String, BoardingInfo>>,
}

/// A display transfer note as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub from_direction: Option<String>,
    #[serde(default)]
    pub to_direction: Option<String>,
    #[serde(default)]
    pub optimal_boarding: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A pathfinding transfer as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathfindingTransferRecord {
    pub from_line: String,
    pub to_line: String,
    pub from_direction: String,
    pub to_direction: String,
    /// Keyed by `front`, `middle` or `back`.
    #[serde(default)]
    pub boarding: Option<HashMap<String, BoardingInfo>>,
    #[serde(default)]
    pub single_boarding: Option<BoardingInfo>,
    #[serde(default)]
    pub opposite_doors: Option<bool>,
}

/// The `pathfinding` block of a station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathfindingRecord {
    #[serde(default)]
    pub transfers: Vec<PathfindingTransferRecord>,
}

/// A station as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub lines: Vec<String>,
    #[serde(default)]
    pub exits: Vec<ExitRecord>,
    #[serde(default)]
    pub transfers: Vec<TransferRecord>,
    #[serde(default)]
    pub pathfinding: Option<PathfindingRecord>,
    #[serde(default)]
    pub stm_id: Option<String>,
    #[serde(default)]
    pub accessible: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
}
