//! Reporting
//!
//! Writes each courier's visiting order to a text file and renders the
//! routes and the regional split onto the background map. Reporting only
//! reads computed routes; a failure here never changes them.

#[macro_use]
pub mod macros;
pub mod plot;
pub mod text;

pub use plot::{plot_assignment, plot_route, PlotSettings, ASSIGNMENT_PLOT_FILE};
pub use text::write_route_file;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Errors that can occur while writing reports
#[derive(Debug)]
pub enum ReportError {
    /// An output file could not be written
    Io {
        /// The file being written
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// An image could not be rendered
    Render {
        /// The image being rendered
        path: PathBuf,
        /// What the drawing backend reported
        reason: String,
    },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            ReportError::Io { path, source } => {
                write!(f, "Could not write [{}]: {}.", path.display(), source)
            }
            ReportError::Render { path, reason } => {
                write!(f, "Could not render [{}]: {}.", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::Render { .. } => None,
        }
    }
}
