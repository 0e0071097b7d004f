//! Runtime state of the Windows host.

pub mod state;

pub use state::{publish, with_state, App, HostState};
