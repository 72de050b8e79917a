//! Shortest path search and the planner facade.
//!
//! Finds the cheapest route between two bare station nodes, then collapses
//! the line-qualified nodes back to a plain station sequence.

use petgraph::algo::astar;
use tracing::debug;

use super::boarding::{AnnotatedStep, add_boarding};
use super::config::PlannerConfig;
use super::error::PlanError;
use super::graph::{NetworkGraph, NodeKey};
use super::steps::{Step, to_steps};
use crate::domain::{Network, Station, StationId};

/// A route found by the search: stations in travel order and total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stations: Vec<StationId>,
    pub cost: u64,
}

/// Find the cheapest route between two stations.
///
/// Returns `None` if either station is not in the graph or no route exists.
/// Consecutive visits to the same station (stepping onto or off a platform,
/// changing lines) are collapsed into one entry.
pub fn shortest_route(graph: &NetworkGraph, start: &StationId, end: &StationId) -> Option<Route> {
    let from = graph.node(&NodeKey::Station(start.clone()))?;
    let goal = graph.node(&NodeKey::Station(end.clone()))?;

    let (cost, nodes) = astar(
        graph.inner(),
        from,
        |n| n == goal,
        |e| *e.weight(),
        |_| 0,
    )?;

    let mut stations: Vec<StationId> = nodes
        .into_iter()
        .map(|idx| graph.key(idx).station().clone())
        .collect();
    stations.dedup();

    Some(Route { stations, cost })
}

/// A planned trip: the station path and its annotated steps.
#[derive(Debug, Clone)]
pub struct Plan<'a> {
    pub path: Vec<&'a Station>,
    pub steps: Vec<AnnotatedStep<'a>>,
}

/// Trip planner over a fixed network.
///
/// Holds the network and its graph; both are read-only after construction,
/// so one `PathFinder` can serve any number of concurrent queries.
#[derive(Debug, Clone)]
pub struct PathFinder {
    network: Network,
    graph: NetworkGraph,
    config: PlannerConfig,
}

impl PathFinder {
    /// Build the graph for `network`.
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        let graph = NetworkGraph::build(&network, &config);
        Self {
            network,
            graph,
            config,
        }
    }

    /// The network this planner routes over.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The underlying graph.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Shortest station sequence from `start` to `end`.
    ///
    /// `None` means no route: an unknown station or a disconnected pair.
    pub fn find_path(&self, start: &StationId, end: &StationId) -> Option<Vec<&Station>> {
        let route = shortest_route(&self.graph, start, end)?;
        debug!(
            start = %start,
            end = %end,
            stations = route.stations.len(),
            cost = route.cost,
            "Found path"
        );
        route
            .stations
            .iter()
            .map(|id| self.network.station(id))
            .collect()
    }

    /// Weighted cost of the shortest route, if one exists.
    pub fn path_cost(&self, start: &StationId, end: &StationId) -> Option<u64> {
        shortest_route(&self.graph, start, end).map(|route| route.cost)
    }

    /// Decompose a path into rider actions.
    pub fn to_steps<'a>(&'a self, path: &[&'a Station]) -> Result<Vec<Step<'a>>, PlanError> {
        to_steps(&self.network, path)
    }

    /// Attach boarding guidance to steps.
    pub fn add_boarding<'a>(&self, steps: &[Step<'a>]) -> Result<Vec<AnnotatedStep<'a>>, PlanError> {
        add_boarding(steps, &self.config)
    }

    /// Run the full pipeline for one query.
    ///
    /// `Ok(None)` means there is no route. `Err` means the path or steps
    /// broke an internal invariant and no directions can be given.
    pub fn plan(&self, start: &StationId, end: &StationId) -> Result<Option<Plan<'_>>, PlanError> {
        let Some(path) = self.find_path(start, end) else {
            return Ok(None);
        };
        let steps = self.to_steps(&path)?;
        let steps = self.add_boarding(&steps)?;
        Ok(Some(Plan { path, steps }))
    }
}
