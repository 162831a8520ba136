//! Widgets composed by the application's render pass.

/// Bordered result panels.
pub mod panel;
/// Query row with status line.
pub mod prompt;
/// Scrollbar for the result panels.
pub mod scrollbar;
/// Top-k selector, theme toggle and key hint.
pub mod toolbar;

pub use panel::{PanelContext, panel_lines, render_panel};
pub use prompt::{InputContext, StatusState, render_input};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use toolbar::{ToolbarContext, render_toolbar};
