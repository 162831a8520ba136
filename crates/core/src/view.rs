//! Targets that search outcomes are rendered into.

use std::time::Instant;

use crate::render::{Panel, PanelContent};
use crate::status::StatusLine;

/// Receiver for the visible effects of the search lifecycle.
///
/// The controller only talks to this trait, which keeps it independent of
/// any terminal or page bindings.
pub trait SearchView {
	/// Replace the contents of both result panels.
	fn show_panels(&mut self, bm25: PanelContent, sbert: PanelContent);

	/// Replace the status message.
	fn set_status(&mut self, text: String);

	/// Clear the status message immediately.
	fn clear_status(&mut self);

	/// Arrange for the current status message to clear after a short delay.
	fn schedule_status_clear(&mut self);
}

/// In-memory state of the two panels and the status line.
#[derive(Debug, Clone)]
pub struct ResultsView {
	pub bm25: PanelContent,
	pub sbert: PanelContent,
	pub status: StatusLine,
}

impl Default for ResultsView {
	fn default() -> Self {
		Self::new(StatusLine::default())
	}
}

impl ResultsView {
	#[must_use]
	pub fn new(status: StatusLine) -> Self {
		Self {
			bm25: PanelContent::Idle,
			sbert: PanelContent::Idle,
			status,
		}
	}

	#[must_use]
	pub fn panel(&self, panel: Panel) -> &PanelContent {
		match panel {
			Panel::Bm25 => &self.bm25,
			Panel::Sbert => &self.sbert,
		}
	}

	/// Whether either panel is waiting on a response.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self.bm25, PanelContent::Loading(_)) || matches!(self.sbert, PanelContent::Loading(_))
	}

	/// Advance time-based state. Returns `true` when something changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		self.status.tick(now)
	}
}

impl SearchView for ResultsView {
	fn show_panels(&mut self, bm25: PanelContent, sbert: PanelContent) {
		self.bm25 = bm25;
		self.sbert = sbert;
	}

	fn set_status(&mut self, text: String) {
		self.status.set(text);
	}

	fn clear_status(&mut self) {
		self.status.clear();
	}

	fn schedule_status_clear(&mut self) {
		self.status.schedule_clear(Instant::now());
	}
}
