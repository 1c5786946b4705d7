//! Loading of the transport network and the destination list.
//!
//! The network file is JSON in node-link layout:
//!
//! ```json
//! {
//!   "directed": false,
//!   "nodes": [{ "id": "Auckland Airport", "lat": -37.008, "lng": 174.785 }],
//!   "links": [{ "source": "Auckland Airport", "target": "Hub", "weight": 0.5 }]
//! }
//! ```
//!
//! `directed` defaults to `false` and a link without `weight` weighs 1.
//! The destination list is plain text, one node name per line.

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::router::router_types::{
    edge::Edge,
    network::{Network, RouterError},
    node::Node,
};

/// Errors that can occur while loading input files
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// The network file is not valid JSON in node-link layout
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// The underlying error
        source: serde_json::Error,
    },

    /// The nodes and links do not form a valid network
    Network(RouterError),

    /// A destination is listed twice
    DuplicateDestination(String),

    /// The depot is listed as a destination
    DepotIsDestination(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Could not read [{}]: {}.", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "Could not parse [{}]: {}.", path.display(), source)
            }
            LoadError::Network(e) => write!(f, "Invalid network: {}.", e),
            LoadError::DuplicateDestination(uid) => {
                write!(f, "Destination [{}] is listed more than once.", uid)
            }
            LoadError::DepotIsDestination(uid) => {
                write!(f, "Depot [{}] can not be a destination.", uid)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Network(e) => Some(e),
            LoadError::DuplicateDestination(_) | LoadError::DepotIsDestination(_) => None,
        }
    }
}

impl From<RouterError> for LoadError {
    fn from(e: RouterError) -> Self {
        LoadError::Network(e)
    }
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    #[serde(default)]
    directed: bool,
    nodes: Vec<NodeRecord>,
    #[serde(default, alias = "edges")]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    source: String,
    target: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| {
        router_error!("(read) Could not read [{}]: {}", path.display(), source);
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn network_from_str(json: &str, path: &Path) -> Result<Network, LoadError> {
    let file: NetworkFile = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let nodes = file
        .nodes
        .into_iter()
        .map(|record| Node::new(&record.id, record.lat, record.lng))
        .collect();
    let edges: Vec<Edge> = file
        .links
        .iter()
        .map(|record| Edge::new(&record.source, &record.target, record.weight))
        .collect();

    Ok(Network::new(nodes, &edges, file.directed)?)
}

/// Parse a network from JSON text.
pub fn parse_network(json: &str) -> Result<Network, LoadError> {
    network_from_str(json, Path::new("<inline>"))
}

/// Load the network file.
///
/// # Errors
/// A [`LoadError`] if the file can not be read or parsed, or if its
/// nodes and links do not form a valid [`Network`].
pub fn load_network(path: &Path) -> Result<Network, LoadError> {
    router_info!("(load_network) Loading [{}].", path.display());
    let json = read(path)?;
    network_from_str(&json, path)
}

/// Parse a destination list: one name per line, surrounding whitespace
/// trimmed, blank lines skipped.
///
/// # Errors
/// [`LoadError::DuplicateDestination`] for a name listed twice and
/// [`LoadError::DepotIsDestination`] if the depot is listed.
pub fn parse_destinations(text: &str, depot: &str) -> Result<Vec<String>, LoadError> {
    let mut seen = HashSet::new();
    let mut destinations = Vec::new();

    for name in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if name == depot {
            return Err(LoadError::DepotIsDestination(name.to_string()));
        }

        if !seen.insert(name) {
            return Err(LoadError::DuplicateDestination(name.to_string()));
        }

        destinations.push(name.to_string());
    }

    Ok(destinations)
}

/// Load the destination list file. See [`parse_destinations`].
pub fn load_destinations(path: &Path, depot: &str) -> Result<Vec<String>, LoadError> {
    router_info!("(load_destinations) Loading [{}].", path.display());
    let text = read(path)?;
    let destinations = parse_destinations(&text, depot)?;
    router_info!("(load_destinations) {} destinations.", destinations.len());
    Ok(destinations)
}
