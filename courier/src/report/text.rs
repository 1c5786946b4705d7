//! Route text files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ReportError;
use crate::router::route::Route;

/// Write a route's stops to `<dir>/<label>.txt`, one per line. The
/// first and last lines are the depot.
///
/// # Returns
/// The path of the written file.
pub fn write_route_file(route: &Route, dir: &Path, label: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(format!("{label}.txt"));
    report_debug!("(write_route_file) Writing {} stops to [{}].", route.stops.len(), path.display());

    let io_error = |source: std::io::Error| ReportError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    for stop in &route.stops {
        writeln!(writer, "{}", stop).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    report_info!("(write_route_file) Wrote [{}].", path.display());
    Ok(path)
}
