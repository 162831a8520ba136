use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthChar;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the query row.
pub struct InputContext<'a> {
	pub query_input: &'a QueryInput<'a>,
	/// Label drawn before the text field.
	pub prompt: &'a str,
	/// Shown while the field is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status line shown at the right end of the query row.
pub struct StatusState<'a> {
	pub status_text: &'a str,
	/// Whether a request is in flight; adds a spinner in front of the text.
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, query field, placeholder and status line.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, status: StatusState<'_>) {
	let InputContext {
		query_input,
		prompt,
		placeholder,
		area,
		theme,
	} = input;

	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_width = Line::from(prompt).width() as u16;
	let [prompt_area, field_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);

	frame.render_widget(Line::styled(prompt, theme.prompt_style()), prompt_area);
	query_input.render_textarea(frame, field_area);

	if query_input.text().is_empty()
		&& let Some(placeholder) = placeholder
	{
		render_placeholder(frame, field_area, placeholder, theme);
	}

	render_status(frame, field_area, status, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width < 2 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let display = truncate_to_width(text, usize::from(area.width - 1));
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		area.width - 1,
	);
}

/// Longest prefix of `text` that fits in `max_width` terminal columns.
fn truncate_to_width(text: &str, max_width: usize) -> &str {
	let mut used = 0;
	for (index, ch) in text.char_indices() {
		used += ch.width().unwrap_or(0);
		if used > max_width {
			return &text[..index];
		}
	}
	text
}

fn render_status(frame: &mut Frame, area: Rect, status: StatusState<'_>, theme: &Theme) {
	let StatusState {
		status_text,
		busy,
		throbber_state,
	} = status;
	if status_text.is_empty() {
		return;
	}

	let muted = theme.empty_style();
	let mut line = Line::default();
	if busy {
		let spinner = Throbber::default()
			.style(muted)
			.throbber_style(theme.prompt_style());
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(status_text, muted));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Never overwrite typed text; keep a gap after the last visible glyph.
	let row = area.top();
	let last_glyph = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_glyph {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}
	let max_width = area.right() - start_x;
	buffer.set_line(start_x, row, &line, max_width.min(line_width));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn placeholder_truncates_by_display_width() {
		assert_eq!(truncate_to_width("Search the index", 6), "Search");
		assert_eq!(truncate_to_width("検索語を入力", 5), "検索");
		assert_eq!(truncate_to_width("short", 20), "short");
	}
}
