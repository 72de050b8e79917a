//! Metro trip planner server.
//!
//! Finds the shortest route between two metro stations and tells the
//! rider where to stand on each train so they come out next to the right
//! stairs.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod planner;
pub mod stations;
pub mod web;
