//! Router module
//!
//! Holds the transport network and its shortest-path oracle, the
//! regional split of destinations between couriers and the
//! nearest-neighbour route builder.

#[macro_use]
pub mod macros;
pub mod partition;
pub mod route;
pub mod router_types;
pub mod router_utils;
