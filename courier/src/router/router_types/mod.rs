pub mod edge;
pub mod location;
pub mod network;
pub mod node;
