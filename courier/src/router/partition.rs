//! Regional split of the destinations between the four couriers.
//!
//! Each destination is classified by a fixed cascade of latitude and
//! longitude thresholds. The rules overlap, so their order decides the
//! outcome: the first matching rule wins and anything left over goes to
//! the East/South courier.
//!
//! | Rule | Test | Courier |
//! |------|------|---------|
//! | 1 | `lat > -36.83` and `lng < 174.67` | 1, North Shore |
//! | 2 | `lat > -36.78` | 1, North Shore |
//! | 3 | `lng < 174.748` | 2, West Auckland |
//! | 4 | `lng < 174.84` | 3, Central Auckland |
//! | - | otherwise | 4, East/South Auckland |

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::router::router_types::{
    location::Location,
    network::{Network, RouterError},
};

/// Number of couriers, and of buckets in an [`Assignment`].
pub const COURIER_COUNT: usize = 4;

const NORTH_WEST_MIN_LAT: f64 = -36.83;
const NORTH_WEST_MAX_LNG: f64 = 174.67;
const NORTH_MIN_LAT: f64 = -36.78;
const WEST_MAX_LNG: f64 = 174.748;
const CENTRAL_MAX_LNG: f64 = 174.84;

/// The four couriers, in bucket order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Courier {
    /// Courier 1
    NorthShore,
    /// Courier 2
    WestAuckland,
    /// Courier 3
    CentralAuckland,
    /// Courier 4
    EastSouthAuckland,
}

impl Courier {
    /// Every courier, indexed like the buckets.
    pub const ALL: [Courier; COURIER_COUNT] = [
        Courier::NorthShore,
        Courier::WestAuckland,
        Courier::CentralAuckland,
        Courier::EastSouthAuckland,
    ];

    /// Zero-based bucket index.
    pub fn index(self) -> usize {
        match self {
            Courier::NorthShore => 0,
            Courier::WestAuckland => 1,
            Courier::CentralAuckland => 2,
            Courier::EastSouthAuckland => 3,
        }
    }

    /// One-based courier number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Base name for this courier's output files.
    pub fn label(self) -> String {
        format!("path_{}", self.number())
    }

    /// Human readable region name.
    pub fn region(self) -> &'static str {
        match self {
            Courier::NorthShore => "North Shore",
            Courier::WestAuckland => "West Auckland",
            Courier::CentralAuckland => "Central Auckland",
            Courier::EastSouthAuckland => "East/South Auckland",
        }
    }
}

impl Display for Courier {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "Courier {} ({})", self.number(), self.region())
    }
}

struct RegionRule {
    courier: Courier,
    matches: fn(&Location) -> bool,
}

fn is_north_west(location: &Location) -> bool {
    location.latitude.into_inner() > NORTH_WEST_MIN_LAT
        && location.longitude.into_inner() < NORTH_WEST_MAX_LNG
}

fn is_north(location: &Location) -> bool {
    location.latitude.into_inner() > NORTH_MIN_LAT
}

fn is_west(location: &Location) -> bool {
    location.longitude.into_inner() < WEST_MAX_LNG
}

fn is_central(location: &Location) -> bool {
    location.longitude.into_inner() < CENTRAL_MAX_LNG
}

/// Evaluated top to bottom; do not reorder.
const REGION_RULES: [RegionRule; 4] = [
    RegionRule {
        courier: Courier::NorthShore,
        matches: is_north_west,
    },
    RegionRule {
        courier: Courier::NorthShore,
        matches: is_north,
    },
    RegionRule {
        courier: Courier::WestAuckland,
        matches: is_west,
    },
    RegionRule {
        courier: Courier::CentralAuckland,
        matches: is_central,
    },
];

/// Courier responsible for a location.
pub fn classify(location: &Location) -> Courier {
    REGION_RULES
        .iter()
        .find(|rule| (rule.matches)(location))
        .map(|rule| rule.courier)
        .unwrap_or(Courier::EastSouthAuckland)
}

/// Destinations split into one bucket per courier.
///
/// Buckets keep the order in which destinations were given; the route
/// builder breaks ties by that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    buckets: [Vec<String>; COURIER_COUNT],
}

impl Assignment {
    /// Wraps buckets that were split by other means.
    ///
    /// The caller is responsible for the buckets being disjoint.
    pub fn from_buckets(buckets: [Vec<String>; COURIER_COUNT]) -> Self {
        Assignment { buckets }
    }

    /// Destinations of one courier.
    pub fn bucket(&self, courier: Courier) -> &[String] {
        &self.buckets[courier.index()]
    }

    /// Iterate over the couriers and their destinations, in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (Courier, &[String])> {
        Courier::ALL
            .into_iter()
            .map(move |courier| (courier, self.bucket(courier)))
    }

    /// The courier a destination was assigned to, if any.
    pub fn courier_of(&self, uid: &str) -> Option<Courier> {
        self.iter()
            .find(|(_, bucket)| bucket.iter().any(|destination| destination == uid))
            .map(|(courier, _)| courier)
    }

    /// Total number of destinations over all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether no courier has anything to deliver.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand the buckets over, in courier order.
    pub fn into_buckets(self) -> [Vec<String>; COURIER_COUNT] {
        self.buckets
    }
}

/// Split the destinations into four buckets by location.
///
/// # Errors
/// [`RouterError::UnknownNode`] for the first destination that is not
/// part of the network.
pub fn partition(network: &Network, destinations: &[String]) -> Result<Assignment, RouterError> {
    router_debug!(
        "(partition) Splitting {} destinations.",
        destinations.len()
    );

    let mut assignment = Assignment::default();
    for destination in destinations {
        let location = network.get_location(destination)?;
        let courier = classify(&location);
        assignment.buckets[courier.index()].push(destination.clone());
    }

    for (courier, bucket) in assignment.iter() {
        router_info!("(partition) {} has {} destinations.", courier, bucket.len());
    }

    Ok(assignment)
}
