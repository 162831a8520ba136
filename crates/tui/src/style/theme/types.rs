use ratatui::style::{Color, Style};

/// A colour scheme for every element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Background and default text of the whole screen.
	pub base: Style,
	/// Panel titles and borders.
	pub header: Style,
	/// Query prompt and input text.
	pub prompt: Style,
	/// Muted text: placeholders, metadata, status line.
	pub empty: Style,
	/// Emphasised query matches inside snippets.
	pub highlight: Style,
	/// Result headings.
	pub title: Style,
	/// Non-fatal problems such as a failed reranker.
	pub warning: Style,
	/// Request and validation errors.
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn base_style(&self) -> Style {
		self.base
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	/// Style for a bordered panel frame.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}
}
