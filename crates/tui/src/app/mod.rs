//! Application state and behavior for the interactive client.
//!
//! The [`App`] type aggregates the query input, the request controller and
//! the panels it updates. Supporting modules split the implementation into
//! key handling, rendering and search coordination.

mod actions;
mod controls;
mod render;
mod search;
mod state;

pub(crate) use search::SearchRuntime;
pub use state::{App, AppOptions};
