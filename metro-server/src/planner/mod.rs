//! Trip planning over the metro graph.
//!
//! This module implements the core pipeline that answers:
//! "How do I get from station A to station B, and where on the train
//! should I stand?"
//!
//! A query runs in three stages, each usable on its own:
//! 1. [`PathFinder::find_path`] searches the weighted station graph for the
//!    cheapest station sequence.
//! 2. [`PathFinder::to_steps`] turns that sequence into start, transfer and
//!    exit actions.
//! 3. [`PathFinder::add_boarding`] resolves boarding positions back to front.

mod boarding;
mod config;
mod error;
mod graph;
mod search;
mod steps;


pub use boarding::{AnnotatedStep, add_boarding};
pub use config::PlannerConfig;
pub use error::PlanError;
pub use graph::{NetworkGraph, NodeKey};
pub use search::{PathFinder, Plan, Route, shortest_route};
pub use steps::{Step, to_steps};
