//! Transient status line shown next to the query input.

use std::time::{Duration, Instant};

/// How long a finished search keeps its status message.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(2500);

pub const STATUS_SEARCHING: &str = "Searching…";
pub const STATUS_ABORTED: &str = "Aborted";

/// Status message for a completed search.
#[must_use]
pub fn done_message(topk: impl std::fmt::Display) -> String {
	format!("Done · top {topk}")
}

/// A status message with an optional scheduled clear.
///
/// A scheduled clear belongs to the message that was current when it was
/// scheduled: [`StatusLine::set`] drops any pending deadline, so an older
/// search can never wipe the status of a newer one.
#[derive(Debug, Clone)]
pub struct StatusLine {
	text: String,
	clear_at: Option<Instant>,
	delay: Duration,
}

impl Default for StatusLine {
	fn default() -> Self {
		Self::new(DEFAULT_CLEAR_DELAY)
	}
}

impl StatusLine {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			text: String::new(),
			clear_at: None,
			delay,
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Deadline of the pending clear, if any.
	#[must_use]
	pub fn clear_deadline(&self) -> Option<Instant> {
		self.clear_at
	}

	/// Replace the message and cancel any pending clear.
	pub fn set(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.clear_at = None;
	}

	/// Clear immediately.
	pub fn clear(&mut self) {
		self.text.clear();
		self.clear_at = None;
	}

	/// Clear the current message once `delay` has elapsed after `now`.
	pub fn schedule_clear(&mut self, now: Instant) {
		if self.text.is_empty() {
			self.clear_at = None;
			return;
		}
		self.clear_at = Some(now + self.delay);
	}

	/// Apply a due clear. Returns `true` if the message changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.clear_at {
			Some(deadline) if now >= deadline => {
				self.clear();
				true
			}
			_ => false,
		}
	}
}
