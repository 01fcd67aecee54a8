//! Network layer - runs the external HTTP client
//!
//! The Network actor receives request commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
