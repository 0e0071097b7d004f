//! Event handlers and dispatching.

pub mod dispatcher;

pub use dispatcher::{dispatch, dispatch_events, Effect};
