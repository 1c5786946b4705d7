//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// An edge is a connection between two nodes, referenced by uid.
/// The cost represents the "weight" of the edge, the travel time
/// between its two ends.
#[derive(Debug, Clone, PartialEq, Hash, Eq, Serialize)]
pub struct Edge {
    /// One end of the edge.
    pub from: String,

    /// The other end of the edge.
    pub to: String,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl Edge {
    /// Creates an edge between two node uids.
    pub fn new(from: &str, to: &str, cost: f64) -> Self {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            cost: OrderedFloat(cost),
        }
    }

    /// An edge weight must be a finite, non-negative travel time.
    pub fn has_valid_cost(&self) -> bool {
        self.cost.into_inner().is_finite() && self.cost.into_inner() >= 0.0
    }
}
