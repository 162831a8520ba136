//! Scrollbar shared by the result panels.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scroll bounds for a panel of wrapped text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Rows of content after wrapping.
	pub content_length: usize,
	/// Rows visible at once.
	pub viewport_len: usize,
	/// Largest useful scroll offset.
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Empty metrics when either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Map a scroll offset onto the scrollbar track.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 {
			0
		} else {
			scroll.min(self.max_scroll).saturating_mul(self.content_length - 1) / self.max_scroll
		}
	}
}

/// Draw a vertical scrollbar on the right edge of `area` and return the
/// remaining content area.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header_fg()));

	let track = Rect {
		x: area.x + area.width.saturating_sub(1),
		width: 1,
		..area
	};
	frame.render_stateful_widget(scrollbar, track, state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
