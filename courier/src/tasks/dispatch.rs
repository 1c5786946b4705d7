//! Parallel dispatch of the four courier routes.
//!
//! Every bucket gets its own blocking task; the route builder is a
//! synchronous loop and never yields. The network is shared read-only
//! between the workers. All workers are joined before anything is
//! returned, and routes come back in courier order whatever order the
//! workers finish in.

use std::sync::Arc;

use futures::future::join_all;

use super::TaskError;
use crate::router::partition::{Assignment, Courier, COURIER_COUNT};
use crate::router::route::{build_route, Route};
use crate::router::router_types::network::PathOracle;

/// Build the routes of all four couriers concurrently.
///
/// # Returns
/// One [`Route`] per courier, indexed like [`Courier::ALL`].
///
/// # Errors
/// Fails once every worker has finished if any of them failed. The
/// failure of the lowest numbered courier is returned; all failures are
/// logged.
pub async fn dispatch<O>(
    oracle: Arc<O>,
    assignment: Assignment,
    depot: &str,
) -> Result<[Route; COURIER_COUNT], TaskError>
where
    O: PathOracle + Send + Sync + 'static,
{
    tasks_info!(
        "(dispatch) Start: {} destinations for {} couriers.",
        assignment.len(),
        COURIER_COUNT
    );

    let handles = Courier::ALL
        .into_iter()
        .zip(assignment.into_buckets())
        .map(|(courier, bucket)| {
            let oracle = Arc::clone(&oracle);
            let depot = depot.to_string();

            tokio::task::spawn_blocking(move || {
                tasks_debug!(
                    "(dispatch) {} starts with {} destinations.",
                    courier,
                    bucket.len()
                );
                build_route(oracle.as_ref(), &bucket, &depot)
            })
        });

    let results = join_all(handles).await;

    let mut routes = Vec::with_capacity(COURIER_COUNT);
    let mut failure = None;
    for (courier, result) in Courier::ALL.into_iter().zip(results) {
        match result {
            Ok(Ok(route)) => {
                tasks_info!("(dispatch) {} done, cost {:.2}.", courier, route.cost);
                routes.push(route);
            }
            Ok(Err(e)) => {
                tasks_error!("(dispatch) {} failed: {}", courier, e);
                if failure.is_none() {
                    failure = Some(TaskError::Route { courier, source: e });
                }
            }
            Err(e) => {
                tasks_error!("(dispatch) {} worker did not complete: {}", courier, e);
                if failure.is_none() {
                    failure = Some(TaskError::Join { courier });
                }
            }
        }
    }

    if let Some(e) = failure {
        return Err(e);
    }

    let routes: [Route; COURIER_COUNT] = routes
        .try_into()
        .map_err(|_| TaskError::Join {
            courier: Courier::EastSouthAuckland,
        })?;

    tasks_info!("(dispatch) All couriers done.");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::partition::partition;
    use crate::router::router_types::network::{Network, RouterError, Segment};
    use crate::router::router_utils::mock::{auckland_network, network_with_island, AIRPORT};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers like the network, but slows down queries into selected
    /// nodes and records which courier finished when.
    struct SlowOracle {
        network: Network,
        slow_nodes: Vec<String>,
        delay: Duration,
        arrivals: Mutex<Vec<String>>,
    }

    impl PathOracle for SlowOracle {
        fn shortest_path(&self, from: &str, to: &str) -> Result<Segment, RouterError> {
            if self.slow_nodes.iter().any(|node| node == to) {
                std::thread::sleep(self.delay);
            }
            if to == AIRPORT {
                if let Ok(mut arrivals) = self.arrivals.lock() {
                    arrivals.push(from.to_string());
                }
            }
            self.network.shortest_path(from, to)
        }
    }

    #[tokio::test]
    async fn test_dispatch_sample_network() {
        crate::get_log_handle().await;
        ut_info!("(test_dispatch_sample_network) Start.");

        let (network, homes) = auckland_network();
        let assignment = partition(&network, &homes).unwrap();
        let expected = assignment.clone();

        let routes = dispatch(Arc::new(network), assignment, AIRPORT)
            .await
            .unwrap();

        for (courier, route) in Courier::ALL.iter().zip(routes.iter()) {
            ut_debug!("(test_dispatch_sample_network) {}: {:?}", courier, route.stops);
            assert_eq!(route.stops.first().map(String::as_str), Some(AIRPORT));
            assert_eq!(route.stops.last().map(String::as_str), Some(AIRPORT));

            let mut visited = route.destinations().to_vec();
            let mut bucket = expected.bucket(*courier).to_vec();
            visited.sort();
            bucket.sort();
            assert_eq!(visited, bucket);
            assert!(route.cost > 0.0);
        }

        ut_info!("(test_dispatch_sample_network) Success.");
    }

    #[tokio::test]
    async fn test_dispatch_matches_sequential_routes() {
        crate::get_log_handle().await;
        ut_info!("(test_dispatch_matches_sequential_routes) Start.");

        let (network, homes) = auckland_network();
        let assignment = partition(&network, &homes).unwrap();
        let sequential: Vec<Route> = assignment
            .iter()
            .map(|(_, bucket)| build_route(&network, bucket, AIRPORT).unwrap())
            .collect();

        let routes = dispatch(Arc::new(network), assignment, AIRPORT)
            .await
            .unwrap();
        assert_eq!(routes.to_vec(), sequential);

        ut_info!("(test_dispatch_matches_sequential_routes) Success.");
    }

    #[tokio::test]
    async fn test_dispatch_keeps_courier_order() {
        crate::get_log_handle().await;
        ut_info!("(test_dispatch_keeps_courier_order) Start.");

        let (network, homes) = auckland_network();
        let assignment = partition(&network, &homes).unwrap();

        // courier 1 is slowed down so it finishes last
        let oracle = Arc::new(SlowOracle {
            network,
            slow_nodes: assignment.bucket(Courier::NorthShore).to_vec(),
            delay: Duration::from_millis(150),
            arrivals: Mutex::new(Vec::new()),
        });

        let routes = dispatch(Arc::clone(&oracle), assignment.clone(), AIRPORT)
            .await
            .unwrap();

        let arrivals = oracle.arrivals.lock().unwrap().clone();
        let last = arrivals.last().cloned().unwrap_or_default();
        assert_eq!(assignment.courier_of(&last), Some(Courier::NorthShore));

        for (courier, route) in Courier::ALL.iter().zip(routes.iter()) {
            for destination in route.destinations() {
                assert_eq!(assignment.courier_of(destination), Some(*courier));
            }
        }
        let costs: Vec<f64> = routes.iter().map(|route| route.cost).collect();
        assert_eq!(costs.len(), COURIER_COUNT);

        ut_info!("(test_dispatch_keeps_courier_order) Success.");
    }

    #[tokio::test]
    async fn test_dispatch_empty_buckets() {
        crate::get_log_handle().await;
        ut_info!("(test_dispatch_empty_buckets) Start.");

        let (network, _) = auckland_network();
        let routes = dispatch(Arc::new(network), Assignment::default(), AIRPORT)
            .await
            .unwrap();

        for route in routes.iter() {
            assert_eq!(route.stops, vec![AIRPORT, AIRPORT]);
            assert_eq!(route.cost, 0.0);
        }

        ut_info!("(test_dispatch_empty_buckets) Success.");
    }

    #[tokio::test]
    async fn test_dispatch_fails_when_one_worker_fails() {
        crate::get_log_handle().await;
        ut_info!("(test_dispatch_fails_when_one_worker_fails) Start.");

        let network = network_with_island();
        let assignment = Assignment::from_buckets([
            vec!["A".to_string()],
            vec![],
            vec!["Island".to_string()],
            vec!["B".to_string()],
        ]);

        let result = dispatch(Arc::new(network), assignment, "Depot").await;
        assert_eq!(
            result.unwrap_err(),
            TaskError::Route {
                courier: Courier::CentralAuckland,
                source: RouterError::NoPath {
                    from: "Depot".to_string(),
                    to: "Island".to_string(),
                },
            }
        );

        ut_info!("(test_dispatch_fails_when_one_worker_fails) Success.");
    }
}
