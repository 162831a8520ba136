//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// The query text field.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		let mut input = Self {
			textarea,
			focused: false,
		};
		input.set_focused(false);
		input
	}

	/// Current text of the field.
	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join(" ")
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	/// Apply the colours of the current theme.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Forward a key press. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Draw the field into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
