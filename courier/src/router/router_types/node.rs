//! Struct definitions and implementations for objects that represent
//! vertices in the transport network.
//!
//! A [`Node`] is any named stop of the network: a depot, a rest home
//! to deliver to, or a transit stop a courier merely passes through.
use serde::{Deserialize, Serialize};

use super::location::Location;

/// Represent a vertex in a graph.
#[derive(Debug, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node name as it appears in the network file and in the
    /// destination list. Unique within a network.
    pub uid: String,

    /// Denote the geographical position of the node.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl Node {
    /// Creates a node at the given latitude and longitude.
    pub fn new(uid: &str, latitude: f64, longitude: f64) -> Self {
        Node {
            uid: uid.to_string(),
            location: Location::new(latitude, longitude),
        }
    }
}
