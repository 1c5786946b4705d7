//! The core of the router library.
//!
//! A [`Network`] holds the transport graph given an input of nodes and
//! weighted edges. It also answers shortest-path queries between two
//! named nodes through the [`PathOracle`] trait, which is all the route
//! builder needs to know about the graph.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use ordered_float::OrderedFloat;
use petgraph::{algo::astar, graph::NodeIndex, stable_graph::StableDiGraph};

use super::{edge::Edge, location::Location, node::Node};

/// Error types for the router.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterError {
    /// A node name is not part of the network.
    UnknownNode(String),

    /// The two nodes are not connected.
    NoPath {
        /// Start of the failed query.
        from: String,
        /// End of the failed query.
        to: String,
    },

    /// The same node name was declared twice.
    DuplicateNode(String),

    /// An edge weight is negative or not a finite number.
    InvalidWeight {
        /// One end of the edge.
        from: String,
        /// The other end of the edge.
        to: String,
    },
}

impl Display for RouterError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RouterError::UnknownNode(uid) => write!(f, "Unknown node [{}]", uid),
            RouterError::NoPath { from, to } => write!(f, "No path from [{}] to [{}]", from, to),
            RouterError::DuplicateNode(uid) => write!(f, "Duplicate node [{}]", uid),
            RouterError::InvalidWeight { from, to } => {
                write!(f, "Invalid weight on edge [{}] -> [{}]", from, to)
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// The answer to one shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Node names from start to end, both included.
    pub path: Vec<String>,

    /// Sum of the edge weights along `path`.
    pub cost: f64,
}

/// Shortest-path capability over a network.
///
/// A single query returns both the path and its weight, so callers
/// never need to ask twice for the same pair.
pub trait PathOracle {
    /// Find the minimum-weight path between two nodes.
    ///
    /// # Errors
    /// * [`RouterError::UnknownNode`] if either node is not in the network.
    /// * [`RouterError::NoPath`] if `to` can not be reached from `from`.
    fn shortest_path(&self, from: &str, to: &str) -> Result<Segment, RouterError>;
}

/// A Network struct contains a graph of nodes and also a hashmap
/// that maps a node name to its index in the graph.
#[derive(Debug)]
pub struct Network {
    pub(crate) graph: StableDiGraph<Node, OrderedFloat<f64>>,
    pub(crate) node_indices: HashMap<String, NodeIndex>,
}

impl Network {
    /// Creates a new network from its nodes and edges.
    ///
    /// # Arguments
    /// * `nodes` - Every node of the network, names must be unique.
    /// * `edges` - Weighted connections between nodes, referenced by name.
    /// * `directed` - When `false`, each edge can be travelled both ways.
    ///
    /// # Errors
    /// Returns a [`RouterError`] for a duplicate node, an edge referring
    /// to an unknown node, or an edge weight that is not a non-negative
    /// finite number.
    pub fn new(nodes: Vec<Node>, edges: &[Edge], directed: bool) -> Result<Network, RouterError> {
        router_info!(
            "(new) Building network with {} nodes and {} edges.",
            nodes.len(),
            edges.len()
        );

        let mut node_indices = HashMap::with_capacity(nodes.len());
        let mut graph = StableDiGraph::with_capacity(nodes.len(), edges.len() * 2);

        for node in nodes {
            if node_indices.contains_key(&node.uid) {
                router_error!("(new) Node [{}] is declared twice.", node.uid);
                return Err(RouterError::DuplicateNode(node.uid));
            }

            let uid = node.uid.clone();
            let index = graph.add_node(node);
            node_indices.insert(uid, index);
        }

        for edge in edges {
            if !edge.has_valid_cost() {
                router_error!(
                    "(new) Edge [{}] -> [{}] has invalid weight {}.",
                    edge.from,
                    edge.to,
                    edge.cost
                );
                return Err(RouterError::InvalidWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }

            let Some(from_index) = node_indices.get(&edge.from).copied() else {
                return Err(RouterError::UnknownNode(edge.from.clone()));
            };

            let Some(to_index) = node_indices.get(&edge.to).copied() else {
                return Err(RouterError::UnknownNode(edge.to.clone()));
            };

            graph.add_edge(from_index, to_index, edge.cost);
            if !directed {
                graph.add_edge(to_index, from_index, edge.cost);
            }
        }

        router_info!(
            "(new) Network ready: {} nodes, {} directed edges.",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Network {
            graph,
            node_indices,
        })
    }

    /// Get the NodeIndex struct for a given node name. The NodeIndex
    /// struct is used to reference things in the graph.
    pub fn get_node_index(&self, uid: &str) -> Option<NodeIndex> {
        self.node_indices.get(uid).copied()
    }

    /// Get a node by name.
    pub fn get_node(&self, uid: &str) -> Option<&Node> {
        self.get_node_index(uid).map(|index| &self.graph[index])
    }

    /// Get the location of a node by name.
    ///
    /// # Errors
    /// [`RouterError::UnknownNode`] if the name is not in the network.
    pub fn get_location(&self, uid: &str) -> Result<Location, RouterError> {
        match self.get_node(uid) {
            Some(node) => Ok(node.location),
            None => {
                router_error!("(get_location) Node [{}] is not in the network.", uid);
                Err(RouterError::UnknownNode(uid.to_string()))
            }
        }
    }

    /// Whether a node name is part of the network.
    pub fn contains(&self, uid: &str) -> bool {
        self.node_indices.contains_key(uid)
    }

    /// Get the number of nodes in the graph.
    pub fn get_node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of directed edges in the graph. An undirected
    /// input edge counts twice.
    pub fn get_edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl PathOracle for Network {
    /// Dijkstra search through petgraph's `astar` with a zero heuristic.
    fn shortest_path(&self, from: &str, to: &str) -> Result<Segment, RouterError> {
        router_debug!("(shortest_path) From [{}] to [{}].", from, to);

        let Some(from_index) = self.get_node_index(from) else {
            router_error!("(shortest_path) 'From' node [{}] is not found.", from);
            return Err(RouterError::UnknownNode(from.to_string()));
        };

        let Some(to_index) = self.get_node_index(to) else {
            router_error!("(shortest_path) 'To' node [{}] is not found.", to);
            return Err(RouterError::UnknownNode(to.to_string()));
        };

        let Some((cost, indices)) = astar(
            &self.graph,
            from_index,
            |finish| finish == to_index,
            |e| (*e.weight()).into_inner(),
            |_| 0.0,
        ) else {
            router_error!("(shortest_path) No path from [{}] to [{}].", from, to);
            return Err(RouterError::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let path = indices
            .into_iter()
            .map(|index| self.graph[index].uid.clone())
            .collect();

        Ok(Segment { path, cost })
    }
}
