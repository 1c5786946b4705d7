//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is the geographic position of a network node.
/// Typically, this type is used in tandem with the
/// [`Node`](`super::node::Node`) type.
///
/// Ordered floats keep locations hashable, so nodes can be used as
/// map keys.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Location {
    /// The latitude of the location.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location.
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Map coordinates of the location, longitude on the x axis.
    pub fn as_map_point(&self) -> (f64, f64) {
        (self.longitude.into_inner(), self.latitude.into_inner())
    }
}
