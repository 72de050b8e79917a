//! Weighted station graph.
//!
//! Each station appears once per line serving it ("on line L at S") plus
//! once as a bare station node. Riding between adjacent stops, stepping
//! onto or off a platform, and changing lines directly are the three edge
//! kinds, weighted by [`PlannerConfig`]. The graph is undirected, so every
//! edge can be travelled both ways. Weights are widened to `u64` so path
//! costs cannot overflow.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, warn};

use super::config::PlannerConfig;
use crate::domain::{LineId, Network, StationId};

/// Identity of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// At a station while riding a specific line.
    OnLine(StationId, LineId),
    /// At a station, independent of line.
    Station(StationId),
}

impl NodeKey {
    /// The physical station this node represents.
    pub fn station(&self) -> &StationId {
        match self {
            NodeKey::OnLine(station, _) => station,
            NodeKey::Station(station) => station,
        }
    }
}

/// The station graph. Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    graph: UnGraph<NodeKey, u64>,
    nodes: HashMap<NodeKey, NodeIndex>,
    synthesized: usize,
}

impl NetworkGraph {
    /// Build the graph for a network.
    pub fn build(network: &Network, config: &PlannerConfig) -> Self {
        let mut builder = Self {
            graph: UnGraph::default(),
            nodes: HashMap::new(),
            synthesized: 0,
        };

        for line in network.lines() {
            for (a, b) in line.segments() {
                let a = builder.ensure_node(NodeKey::OnLine(a.clone(), line.id.clone()));
                let b = builder.ensure_node(NodeKey::OnLine(b.clone(), line.id.clone()));
                builder.ensure_edge(a, b, config.ride_weight.into());
            }
        }

        for station in network.stations() {
            let bare = builder.ensure_node(NodeKey::Station(station.id.clone()));
            for line in &station.lines {
                let on_line = builder.expect_node(NodeKey::OnLine(station.id.clone(), line.clone()));
                builder.ensure_edge(on_line, bare, config.platform_weight.into());
            }

            for (i, line_a) in station.lines.iter().enumerate() {
                for line_b in &station.lines[i + 1..] {
                    let a = builder.expect_node(NodeKey::OnLine(station.id.clone(), line_a.clone()));
                    let b = builder.expect_node(NodeKey::OnLine(station.id.clone(), line_b.clone()));
                    builder.ensure_edge(a, b, config.transfer_weight.into());
                }
            }
        }

        debug!(
            nodes = builder.graph.node_count(),
            edges = builder.graph.edge_count(),
            synthesized = builder.synthesized,
            "Built network graph"
        );

        builder
    }

    fn ensure_node(&mut self, key: NodeKey) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(key.clone());
        self.nodes.insert(key, idx);
        idx
    }

    /// Like `ensure_node`, but a missing node means the station lists a line
    /// whose station order does not include it. Synthesize it anyway.
    fn expect_node(&mut self, key: NodeKey) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(&key) {
            return idx;
        }
        warn!(node = ?key, "Adding missing node");
        self.synthesized += 1;
        self.ensure_node(key)
    }

    fn ensure_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: u64) {
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, weight);
        }
    }

    /// Index of a node, if present.
    pub fn node(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.nodes.get(key).copied()
    }

    /// The key stored at `idx`.
    pub fn key(&self, idx: NodeIndex) -> &NodeKey {
        &self.graph[idx]
    }

    /// Weight of the edge between two nodes, if they are adjacent.
    pub fn edge_weight(&self, a: &NodeKey, b: &NodeKey) -> Option<u64> {
        let edge = self.graph.find_edge(self.node(a)?, self.node(b)?)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of nodes that had to be synthesized for inconsistent data.
    pub fn synthesized_nodes(&self) -> usize {
        self.synthesized
    }

    pub(crate) fn inner(&self) -> &UnGraph<NodeKey, u64> {
        &self.graph
    }
}
