//! A number of methods to generate networks and locations for testing.

use crate::router::router_types::{
    edge::Edge, location::Location, network::Network, node::Node,
};
use rand::Rng;

//-----------------------------------------------------
// Constants
//-----------------------------------------------------
/// Name of the depot in the Auckland sample network.
pub const AIRPORT: &str = "Auckland Airport";

const MIN_LAT: f64 = -37.09336;
const MAX_LAT: f64 = -36.69258;
const MIN_LNG: f64 = 174.48866;
const MAX_LNG: f64 = 175.001869;

/// Generate a random location inside the Auckland map extent.
pub fn generate_location() -> Location {
    let mut rng = rand::thread_rng();
    Location::new(
        rng.gen_range(MIN_LAT..=MAX_LAT),
        rng.gen_range(MIN_LNG..=MAX_LNG),
    )
}

/// Generate `capacity` nodes named `N0`, `N1`, ... at random
/// locations inside the Auckland map extent.
pub fn generate_nodes(capacity: usize) -> Vec<Node> {
    (0..capacity)
        .map(|i| Node {
            uid: format!("N{i}"),
            location: generate_location(),
        })
        .collect()
}

/// Three nodes, every pair connected:
///
/// ```text
/// Depot --2-- A --1-- B
///   \_________5______/
/// ```
pub fn triangle_network() -> Network {
    let (nodes, edges) = triangle();
    Network::new(nodes, &edges, false).unwrap()
}

/// The triangle network, where `A -> B` is one way. Without `B -> A`
/// the way back from `B` to the depot is the direct edge.
pub fn one_way_triangle_network() -> Network {
    let (nodes, _) = triangle();
    let edges = vec![
        Edge::new("Depot", "A", 2.0),
        Edge::new("A", "Depot", 2.0),
        Edge::new("Depot", "B", 5.0),
        Edge::new("B", "Depot", 5.0),
        Edge::new("A", "B", 1.0),
    ];
    Network::new(nodes, &edges, true).unwrap()
}

fn triangle() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        Node::new("Depot", -37.0, 174.78),
        Node::new("A", -36.9, 174.7),
        Node::new("B", -36.85, 174.75),
    ];
    let edges = vec![
        Edge::new("Depot", "A", 2.0),
        Edge::new("Depot", "B", 5.0),
        Edge::new("A", "B", 1.0),
    ];
    (nodes, edges)
}

/// A line of transit stops `T1..Tn` leaving the depot, with a
/// destination `Ri` hanging off each stop `Ti`. Every edge weighs 1.
pub fn ladder_network(rungs: usize) -> Network {
    let mut nodes = vec![Node::new("Depot", -37.0, 174.5)];
    let mut edges = Vec::new();

    for i in 1..=rungs {
        let lng = 174.5 + i as f64 * 0.01;
        nodes.push(Node::new(&format!("T{i}"), -37.0, lng));
        nodes.push(Node::new(&format!("R{i}"), -36.99, lng));

        let previous = if i == 1 {
            "Depot".to_string()
        } else {
            format!("T{}", i - 1)
        };
        edges.push(Edge::new(&previous, &format!("T{i}"), 1.0));
        edges.push(Edge::new(&format!("T{i}"), &format!("R{i}"), 1.0));
    }

    Network::new(nodes, &edges, false).unwrap()
}

/// The triangle network plus an `Island` that no edge reaches.
pub fn network_with_island() -> Network {
    let (mut nodes, edges) = triangle();
    nodes.push(Node::new("Island", -36.8, 174.8));
    Network::new(nodes, &edges, false).unwrap()
}

/// A small Auckland network: the airport, a central hub and two rest
/// homes in each courier region, every home one hop from the hub.
///
/// Returns the network and the rest home names.
pub fn auckland_network() -> (Network, Vec<String>) {
    let homes = vec![
        // North Shore
        Node::new("Albany Rest Home", -36.73, 174.70),
        Node::new("Glenfield Rest Home", -36.80, 174.65),
        // West Auckland
        Node::new("Henderson Rest Home", -36.88, 174.63),
        Node::new("Titirangi Rest Home", -36.94, 174.66),
        // Central Auckland
        Node::new("Epsom Rest Home", -36.89, 174.77),
        Node::new("Ellerslie Rest Home", -36.90, 174.81),
        // East / South Auckland
        Node::new("Howick Rest Home", -36.90, 174.93),
        Node::new("Papakura Rest Home", -37.06, 174.94),
    ];

    let mut nodes = vec![
        Node::new(AIRPORT, -37.008, 174.785),
        Node::new("Hub", -36.85, 174.76),
    ];
    let mut edges = vec![Edge::new(AIRPORT, "Hub", 0.5)];

    for (i, home) in homes.iter().enumerate() {
        edges.push(Edge::new("Hub", &home.uid, 0.1 + i as f64 * 0.05));
    }

    let names = homes.iter().map(|home| home.uid.clone()).collect();
    nodes.extend(homes);

    (Network::new(nodes, &edges, false).unwrap(), names)
}
