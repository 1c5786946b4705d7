//! Courier route planner

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;
use svc_courier::report::{plot_assignment, plot_route, write_route_file, PlotSettings};
use svc_courier::router::partition::{partition, Courier};
use svc_courier::router::router_utils::loader::{load_destinations, load_network};
use svc_courier::*;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| format!("Failed to load configuration from environment: {}", e))?;

    info!("(main) Loading config.");

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    load_logger_config_from_file(config.log_config.as_str())
        .await
        .or_else(|e| Ok::<(), String>(log::error!("(main) {}", e)))?;

    let network = load_network(Path::new(&config.network_file))?;
    let destinations = load_destinations(Path::new(&config.destinations_file), &config.depot)?;
    network.get_location(&config.depot)?;

    info!(
        "(main) {} nodes, {} edges, {} destinations, depot [{}].",
        network.get_node_count(),
        network.get_edge_count(),
        destinations.len(),
        config.depot
    );

    let assignment = partition(&network, &destinations)?;

    let output_dir = Path::new(&config.output_dir);
    let settings = PlotSettings::from(&config);
    let mut report_failures = 0;

    if let Err(e) = plot_assignment(&network, &assignment, &config.depot, &settings, output_dir) {
        log::error!("(main) {}", e);
        report_failures += 1;
    }

    let network = Arc::new(network);
    let started = Instant::now();
    let routes = tasks::dispatch(Arc::clone(&network), assignment, &config.depot).await?;
    let elapsed = started.elapsed();

    for (courier, route) in Courier::ALL.into_iter().zip(routes.iter()) {
        info!("(main) {} travel time: {:.2}", courier, route.cost);

        if let Err(e) = write_route_file(route, output_dir, &courier.label()) {
            log::error!("(main) {}", e);
            report_failures += 1;
        }

        if let Err(e) = plot_route(&network, route, courier, &settings, output_dir) {
            log::error!("(main) {}", e);
            report_failures += 1;
        }
    }

    info!("(main) Routes computed in {:.3} seconds.", elapsed.as_secs_f64());

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    if report_failures > 0 {
        return Err(format!("{} report(s) could not be written", report_failures).into());
    }

    Ok(())
}
