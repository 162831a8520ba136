use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState, Wrap};
use rankview_core::{Highlighted, NoticeKind, PanelContent};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Argument bundle for rendering one result panel.
pub struct PanelContext<'a> {
	/// Title drawn on the panel border.
	pub title: &'a str,
	/// What the panel shows.
	pub content: &'a PanelContent,
	/// Requested scroll offset in wrapped rows; clamped while rendering.
	pub scroll: usize,
	/// Spinner animation state for the loading view.
	pub throbber_state: &'a ThrobberState,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render a bordered result panel. Returns the scroll offset actually used.
pub fn render_panel(frame: &mut Frame, area: Rect, ctx: PanelContext<'_>) -> usize {
	let PanelContext {
		title,
		content,
		scroll,
		throbber_state,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {title} "), theme.header_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.width == 0 || inner.height == 0 {
		return 0;
	}

	let paragraph = Paragraph::new(panel_lines(content, theme, throbber_state))
		.wrap(Wrap { trim: false });
	// Measured at the width left over once the scrollbar takes its column.
	let text_width = inner.width.saturating_sub(1).max(1);
	let metrics = ScrollMetrics::compute(paragraph.line_count(text_width), inner.height as usize);
	let offset = scroll.min(metrics.max_scroll);

	let text_area = if metrics.needs_scrollbar {
		let mut state = ScrollbarState::new(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(metrics.scrollbar_position(offset));
		render_scrollbar(frame, inner, &mut state, theme)
	} else {
		inner
	};

	let paragraph = paragraph.scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
	frame.render_widget(paragraph, text_area);

	offset
}

/// Build the styled lines shown inside a panel.
#[must_use]
pub fn panel_lines<'a>(
	content: &'a PanelContent,
	theme: &Theme,
	throbber_state: &ThrobberState,
) -> Vec<Line<'a>> {
	match content {
		PanelContent::Idle => Vec::new(),
		PanelContent::Loading(label) => {
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.prompt_style());
			vec![Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(label.as_str(), theme.empty_style()),
			])]
		}
		PanelContent::Notice(notice) => {
			let style = match notice.kind {
				NoticeKind::Muted => theme.empty_style(),
				NoticeKind::Warning => theme.warning,
				NoticeKind::Error => theme.error,
			};
			vec![Line::from(Span::styled(notice.text.as_str(), style))]
		}
		PanelContent::Results(items) => {
			let mut lines = Vec::with_capacity(items.len() * 4);
			for (index, item) in items.iter().enumerate() {
				if index > 0 {
					lines.push(Line::default());
				}
				lines.push(Line::from(vec![
					Span::styled(format!("{}. {} ", item.rank, item.title), theme.title),
					Span::styled(format!("({})", item.score_label), theme.empty_style()),
				]));
				lines.push(snippet_line(&item.snippet, theme));
				lines.push(Line::from(Span::styled(item.meta(), theme.empty_style())));
			}
			lines
		}
	}
}

fn snippet_line<'a>(snippet: &'a Highlighted, theme: &Theme) -> Line<'a> {
	let spans: Vec<Span<'a>> = snippet
		.segments()
		.iter()
		.map(|segment| {
			let style = if segment.emphasized {
				theme.highlight_style()
			} else {
				Style::default()
			};
			Span::styled(segment.text.as_str(), style)
		})
		.collect();
	Line::from(spans)
}
