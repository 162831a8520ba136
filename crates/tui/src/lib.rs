//! Interactive terminal UI for `rankview`.
//!
//! This crate contains the ratatui application: the event loop, the render
//! pass for the query row and both result panels, key handling, and the
//! widgets and themes that power them. Requests themselves are driven by
//! `rankview-core`.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;


pub use app::{App, AppOptions};
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme};
