//! Route and assignment images.
//!
//! Both images share one layout: the background map stretched over the
//! configured longitude/latitude extent, then route lines, then one dot
//! per destination, then the depot as a white cross.

use std::path::{Path, PathBuf};

use image::{imageops::FilterType, DynamicImage};
use plotters::prelude::*;

use super::ReportError;
use crate::config::Config;
use crate::router::partition::{Assignment, Courier};
use crate::router::route::Route;
use crate::router::router_types::network::Network;

/// File name of the image showing every destination by courier.
pub const ASSIGNMENT_PLOT_FILE: &str = "all_nodes.png";

/// Type alias for the result of a drawing function.
type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Drawn when no background map is available.
const PLAIN_BACKGROUND: RGBColor = RGBColor(32, 36, 48);

/// Where and how large the map is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Map image stretched over the extent below. Plain background if
    /// `None` or unreadable.
    pub background_image: Option<PathBuf>,
    /// western edge, degrees
    pub min_lng: f64,
    /// eastern edge, degrees
    pub max_lng: f64,
    /// southern edge, degrees
    pub min_lat: f64,
    /// northern edge, degrees
    pub max_lat: f64,
    /// image width in pixels
    pub width: u32,
    /// image height in pixels
    pub height: u32,
}

impl From<&Config> for PlotSettings {
    fn from(config: &Config) -> Self {
        let background_image = match config.background_image.trim() {
            "" => None,
            path => Some(PathBuf::from(path)),
        };

        PlotSettings {
            background_image,
            min_lng: config.map_min_lng,
            max_lng: config.map_max_lng,
            min_lat: config.map_min_lat,
            max_lat: config.map_max_lat,
            width: config.plot_width,
            height: config.plot_height,
        }
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings::from(&Config::new())
    }
}

/// Colour of a courier's dots and route line.
pub fn courier_color(courier: Courier) -> RGBColor {
    match courier {
        Courier::NorthShore => CYAN,
        Courier::WestAuckland => RED,
        Courier::CentralAuckland => YELLOW,
        Courier::EastSouthAuckland => MAGENTA,
    }
}

struct Dot {
    point: (f64, f64),
    color: RGBColor,
}

#[derive(Default)]
struct MapLayers {
    line: Option<(Vec<(f64, f64)>, RGBColor)>,
    dots: Vec<Dot>,
    depot: Option<(f64, f64)>,
}

fn load_background(settings: &PlotSettings) -> Option<DynamicImage> {
    let path = settings.background_image.as_ref()?;
    match image::open(path) {
        Ok(background) => Some(background),
        Err(e) => {
            report_warn!(
                "(load_background) Could not load background [{}], using a plain one: {}",
                path.display(),
                e
            );
            None
        }
    }
}

fn draw_map(path: &Path, settings: &PlotSettings, layers: &MapLayers) -> DrawResult<()> {
    let root = BitMapBackend::new(path, (settings.width, settings.height)).into_drawing_area();
    root.fill(&PLAIN_BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(
        settings.min_lng..settings.max_lng,
        settings.min_lat..settings.max_lat,
    )?;

    if let Some(background) = load_background(settings) {
        let (width, height) = chart.plotting_area().dim_in_pixel();
        let background = background.resize_exact(width, height, FilterType::Nearest);
        let element: BitMapElement<_> = ((settings.min_lng, settings.max_lat), background).into();
        chart.draw_series(std::iter::once(element))?;
    }

    if let Some((points, color)) = &layers.line {
        chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
    }

    chart.draw_series(
        layers
            .dots
            .iter()
            .map(|dot| Circle::new(dot.point, 3, dot.color.filled())),
    )?;

    if let Some(depot) = layers.depot {
        chart.draw_series(std::iter::once(Cross::new(depot, 6, WHITE.stroke_width(2))))?;
    }

    root.present()?;
    Ok(())
}

fn render(path: PathBuf, settings: &PlotSettings, layers: &MapLayers) -> Result<PathBuf, ReportError> {
    match draw_map(&path, settings, layers) {
        Ok(()) => {
            report_info!("(render) Wrote [{}].", path.display());
            Ok(path)
        }
        Err(e) => {
            report_error!("(render) Could not render [{}]: {}", path.display(), e);
            Err(ReportError::Render {
                reason: e.to_string(),
                path,
            })
        }
    }
}

fn map_point(network: &Network, uid: &str) -> Option<(f64, f64)> {
    match network.get_node(uid) {
        Some(node) => Some(node.location.as_map_point()),
        None => {
            report_warn!("(map_point) [{}] is not in the network, not drawn.", uid);
            None
        }
    }
}

/// Render a courier's route to `<dir>/<label>.png`, where the label is
/// the courier's [`Courier::label`].
///
/// The full path, transit stops included, is drawn as a line in the
/// courier's colour with a dot on each destination.
pub fn plot_route(
    network: &Network,
    route: &Route,
    courier: Courier,
    settings: &PlotSettings,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let color = courier_color(courier);
    let line = route
        .path
        .iter()
        .filter_map(|uid| map_point(network, uid))
        .collect();
    let dots = route
        .destinations()
        .iter()
        .filter_map(|uid| map_point(network, uid))
        .map(|point| Dot { point, color })
        .collect();
    let depot = route.stops.first().and_then(|uid| map_point(network, uid));

    let layers = MapLayers {
        line: Some((line, color)),
        dots,
        depot,
    };

    render(dir.join(format!("{}.png", courier.label())), settings, &layers)
}

/// Render every destination coloured by courier, plus the depot, to
/// `<dir>/all_nodes.png`.
pub fn plot_assignment(
    network: &Network,
    assignment: &Assignment,
    depot: &str,
    settings: &PlotSettings,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let dots = assignment
        .iter()
        .flat_map(|(courier, bucket)| {
            let color = courier_color(courier);
            bucket
                .iter()
                .filter_map(|uid| map_point(network, uid))
                .map(move |point| Dot { point, color })
        })
        .collect();

    let layers = MapLayers {
        dots,
        depot: map_point(network, depot),
        ..Default::default()
    };

    render(dir.join(ASSIGNMENT_PLOT_FILE), settings, &layers)
}
