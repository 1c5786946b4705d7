//! Nearest-neighbour route construction.
//!
//! Starting from the depot, a courier always travels to the closest
//! destination it has not visited yet, then returns to the depot once
//! every destination has been reached. Closeness is the weight of the
//! shortest path through the network, so each step asks the
//! [`PathOracle`] for every remaining candidate.
//!
//! # Complexity
//!
//! *O*(*k²*) oracle queries for *k* destinations: *k(k+1)/2* candidate
//! queries plus the way home.
//!
//! The result is a greedy approximation of the round trip. There is no
//! backtracking and no improvement pass.

use serde::Serialize;

use crate::router::router_types::network::{PathOracle, RouterError, Segment};

/// A courier's round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Depot, every destination in visiting order, depot.
    pub stops: Vec<String>,

    /// Every node travelled through, transit stops included. Starts and
    /// ends at the depot.
    pub path: Vec<String>,

    /// Sum of the weights of all travelled segments.
    pub cost: f64,
}

impl Route {
    fn start(depot: &str) -> Self {
        Route {
            stops: vec![depot.to_string()],
            path: vec![depot.to_string()],
            cost: 0.0,
        }
    }

    /// Append a segment ending at `stop`.
    fn push_segment(&mut self, stop: &str, segment: Segment) {
        let mut nodes = segment.path.into_iter().peekable();

        // A segment starts where the previous one ended. Only a
        // single-node segment (travel in place) is kept whole.
        if nodes.len() > 1 && nodes.peek() == self.path.last() {
            nodes.next();
        }

        self.path.extend(nodes);
        self.stops.push(stop.to_string());
        self.cost += segment.cost;
    }

    /// The destinations, in visiting order, without the depot.
    pub fn destinations(&self) -> &[String] {
        match self.stops.len() {
            0..=2 => &[],
            len => &self.stops[1..len - 1],
        }
    }
}

/// Build a round trip from `depot` through every destination using the
/// nearest-neighbour heuristic.
///
/// At each step the oracle is queried once per remaining destination
/// from the current position. The destination with the strictly
/// smallest path weight is visited next; on equal weights the one
/// listed first in `destinations` wins.
///
/// # Errors
/// Any oracle failure aborts the whole route: an unknown node, or a
/// destination (or the depot) that can not be reached.
pub fn build_route<O>(
    oracle: &O,
    destinations: &[String],
    depot: &str,
) -> Result<Route, RouterError>
where
    O: PathOracle + ?Sized,
{
    router_debug!(
        "(build_route) Start from [{}] with {} destinations.",
        depot,
        destinations.len()
    );

    let mut remaining: Vec<&str> = destinations.iter().map(String::as_str).collect();
    let mut route = Route::start(depot);
    let mut current = depot;

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, Segment)> = None;

        for (position, candidate) in remaining.iter().enumerate() {
            let segment = oracle.shortest_path(current, candidate)?;
            let closer = match &nearest {
                Some((_, best)) => segment.cost < best.cost,
                None => true,
            };

            if closer {
                nearest = Some((position, segment));
            }
        }

        let Some((position, segment)) = nearest else {
            break;
        };

        let next = remaining.remove(position);
        router_debug!(
            "(build_route) [{}] -> [{}] costs {}.",
            current,
            next,
            segment.cost
        );

        route.push_segment(next, segment);
        current = next;
    }

    let segment = oracle.shortest_path(current, depot)?;
    route.push_segment(depot, segment);

    router_debug!(
        "(build_route) Route from [{}] visits {} destinations, cost {}.",
        depot,
        route.destinations().len(),
        route.cost
    );

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::router_types::network::Network;
    use crate::router::router_types::{edge::Edge, node::Node};
    use crate::router::router_utils::mock::{
        ladder_network, network_with_island, one_way_triangle_network, triangle_network,
    };
    use std::cell::Cell;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    /// Counts oracle queries on top of a network.
    struct CountingOracle<'a> {
        network: &'a Network,
        queries: Cell<usize>,
    }

    impl PathOracle for CountingOracle<'_> {
        fn shortest_path(&self, from: &str, to: &str) -> Result<Segment, RouterError> {
            self.queries.set(self.queries.get() + 1);
            self.network.shortest_path(from, to)
        }
    }

    #[test]
    fn test_one_way_triangle() {
        let network = one_way_triangle_network();

        let route = build_route(&network, &names(&["A", "B"]), "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "A", "B", "Depot"]);
        assert_eq!(route.path, vec!["Depot", "A", "B", "Depot"]);
        assert_eq!(route.cost, 8.0);
    }

    #[test]
    fn test_triangle_returns_through_cheaper_transit() {
        let network = triangle_network();

        // B -> Depot is cheaper through A (1 + 2) than direct (5)
        let route = build_route(&network, &names(&["A", "B"]), "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "A", "B", "Depot"]);
        assert_eq!(route.path, vec!["Depot", "A", "B", "A", "Depot"]);
        assert_eq!(route.cost, 6.0);
        assert_eq!(route.destinations(), &["A", "B"]);
    }

    #[test]
    fn test_input_order_does_not_change_greedy_choice() {
        let network = triangle_network();

        let route = build_route(&network, &names(&["B", "A"]), "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "A", "B", "Depot"]);
        assert_eq!(route.cost, 6.0);
    }

    #[test]
    fn test_empty_bucket() {
        let network = triangle_network();

        let route = build_route(&network, &[], "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "Depot"]);
        assert_eq!(route.path, vec!["Depot", "Depot"]);
        assert_eq!(route.cost, 0.0);
        assert!(route.destinations().is_empty());
    }

    #[test]
    fn test_route_covers_every_destination() {
        let network = ladder_network(6);
        let bucket = names(&["R5", "R2", "R6", "R1", "R4", "R3"]);

        let route = build_route(&network, &bucket, "Depot").unwrap();

        assert_eq!(route.path.first().map(String::as_str), Some("Depot"));
        assert_eq!(route.path.last().map(String::as_str), Some("Depot"));
        assert_eq!(route.stops.first().map(String::as_str), Some("Depot"));
        assert_eq!(route.stops.last().map(String::as_str), Some("Depot"));
        assert_eq!(route.destinations(), &["R1", "R2", "R3", "R4", "R5", "R6"]);
        for destination in &bucket {
            assert!(route.path.contains(destination));
        }
    }

    #[test]
    fn test_cost_is_sum_of_segments() {
        let network = ladder_network(6);
        let bucket = names(&["R5", "R2", "R6", "R1", "R4", "R3"]);

        let route = build_route(&network, &bucket, "Depot").unwrap();

        let expected: f64 = route
            .stops
            .windows(2)
            .map(|pair| network.shortest_path(&pair[0], &pair[1]).unwrap().cost)
            .sum();
        assert_eq!(route.cost, expected);
        // out along the ladder to R1 (2), then 3 per rung, then home from R6 (7)
        assert_eq!(route.cost, 2.0 + 5.0 * 3.0 + 7.0);
    }

    #[test]
    fn test_path_keeps_transit_nodes() {
        let network = ladder_network(3);

        let route = build_route(&network, &names(&["R2"]), "Depot").unwrap();
        assert_eq!(
            route.path,
            vec!["Depot", "T1", "T2", "R2", "T2", "T1", "Depot"]
        );
        assert_eq!(route.stops, vec!["Depot", "R2", "Depot"]);
        assert_eq!(route.cost, 6.0);
    }

    #[test]
    fn test_build_route_is_deterministic() {
        let network = ladder_network(8);
        let bucket = names(&["R8", "R3", "R5", "R1", "R7"]);

        let first = build_route(&network, &bucket, "Depot").unwrap();
        for _ in 0..5 {
            let again = build_route(&network, &bucket, "Depot").unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_ties_go_to_first_listed() {
        let nodes = vec![
            Node::new("Depot", -37.0, 174.8),
            Node::new("East", -37.0, 174.9),
            Node::new("West", -37.0, 174.7),
        ];
        let edges = vec![
            Edge::new("Depot", "East", 1.0),
            Edge::new("Depot", "West", 1.0),
        ];
        let network = Network::new(nodes, &edges, false).unwrap();

        let route = build_route(&network, &names(&["West", "East"]), "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "West", "East", "Depot"]);

        let route = build_route(&network, &names(&["East", "West"]), "Depot").unwrap();
        assert_eq!(route.stops, vec!["Depot", "East", "West", "Depot"]);
    }

    #[test]
    fn test_query_count() {
        let network = ladder_network(5);
        let oracle = CountingOracle {
            network: &network,
            queries: Cell::new(0),
        };
        let bucket = names(&["R1", "R2", "R3", "R4", "R5"]);

        build_route(&oracle, &bucket, "Depot").unwrap();
        // 5 + 4 + 3 + 2 + 1 candidate queries, one way home
        assert_eq!(oracle.queries.get(), 16);
    }

    #[test]
    fn test_unreachable_destination_fails() {
        let network = network_with_island();

        let result = build_route(&network, &names(&["A", "Island", "B"]), "Depot");
        assert_eq!(
            result,
            Err(RouterError::NoPath {
                from: "Depot".to_string(),
                to: "Island".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_destination_fails() {
        let network = triangle_network();

        let result = build_route(&network, &names(&["A", "Ghost"]), "Depot");
        assert_eq!(result, Err(RouterError::UnknownNode("Ghost".to_string())));
    }

    #[test]
    fn test_unknown_depot_fails() {
        let network = triangle_network();

        let result = build_route(&network, &[], "Nowhere");
        assert_eq!(result, Err(RouterError::UnknownNode("Nowhere".to_string())));
    }
}
