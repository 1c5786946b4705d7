//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to the JSON network description
    pub network_file: String,

    /// path to the destination list, one node name per line
    pub destinations_file: String,

    /// name of the node every courier starts and ends at
    pub depot: String,

    /// directory receiving the route text files and images
    pub output_dir: String,

    /// background map drawn behind the plotted routes
    pub background_image: String,

    /// western edge of the background map, in degrees
    pub map_min_lng: f64,

    /// eastern edge of the background map, in degrees
    pub map_max_lng: f64,

    /// southern edge of the background map, in degrees
    pub map_min_lat: f64,

    /// northern edge of the background map, in degrees
    pub map_max_lat: f64,

    /// width of the rendered images in pixels
    pub plot_width: u32,

    /// height of the rendered images in pixels
    pub plot_height: u32,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            network_file: String::from("network.json"),
            destinations_file: String::from("rest_homes.txt"),
            depot: String::from("Auckland Airport"),
            output_dir: String::from("."),
            background_image: String::from("akl_zoom.png"),
            map_min_lng: 174.48866,
            map_max_lng: 175.001869,
            map_min_lat: -37.09336,
            map_max_lat: -36.69258,
            plot_width: 1280,
            plot_height: 1000,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("network_file", default_config.network_file)?
            .set_default("destinations_file", default_config.destinations_file)?
            .set_default("depot", default_config.depot)?
            .set_default("output_dir", default_config.output_dir)?
            .set_default("background_image", default_config.background_image)?
            .set_default("map_min_lng", default_config.map_min_lng)?
            .set_default("map_max_lng", default_config.map_max_lng)?
            .set_default("map_min_lat", default_config.map_min_lat)?
            .set_default("map_max_lat", default_config.map_max_lat)?
            .set_default("plot_width", default_config.plot_width)?
            .set_default("plot_height", default_config.plot_height)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
