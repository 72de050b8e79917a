//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PathFinder;
use crate::stations::StationIndex;

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Trip planner over the loaded network
    pub finder: Arc<PathFinder>,

    /// Station name search
    pub stations: Arc<StationIndex>,
}

impl AppState {
    /// Create a new app state, indexing the planner's stations for search.
    pub fn new(finder: PathFinder) -> Self {
        let stations = StationIndex::new(finder.network());
        Self {
            finder: Arc::new(finder),
            stations: Arc::new(stations),
        }
    }
}
