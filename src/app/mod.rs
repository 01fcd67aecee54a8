//! App layer - central state management and command processing
//!
//! The App actor receives key presses and network responses,
//! updates state, and emits network commands and render state.

pub mod focus;
pub mod headers;
pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
