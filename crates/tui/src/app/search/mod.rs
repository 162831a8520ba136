//! Search submission and result handling.
//!
//! Requests run on a background runtime; completions are pumped back on the
//! UI thread and only the newest one is allowed to change the panels.

mod coordination;
mod runtime;

pub(crate) use runtime::SearchRuntime;
