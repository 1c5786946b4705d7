//! Tasks
//! Runs the route computation of every courier in parallel.

#[macro_use]
pub mod macros;
pub mod dispatch;

pub use dispatch::dispatch;

use crate::router::partition::Courier;
use crate::router::router_types::network::RouterError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors that can occur when computing the courier routes
#[derive(Clone, Debug, PartialEq)]
pub enum TaskError {
    /// A courier's route could not be built
    Route {
        /// The courier whose route failed
        courier: Courier,
        /// Why the route builder gave up
        source: RouterError,
    },

    /// A courier's worker panicked or was cancelled
    Join {
        /// The courier whose worker was lost
        courier: Courier,
    },
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            TaskError::Route { courier, source } => {
                write!(f, "Route of {} failed: {}.", courier, source)
            }
            TaskError::Join { courier } => write!(f, "Worker of {} did not complete.", courier),
        }
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TaskError::Route { source, .. } => Some(source),
            TaskError::Join { .. } => None,
        }
    }
}
