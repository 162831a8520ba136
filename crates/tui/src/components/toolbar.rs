use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use rankview_core::{ThemePreference, TopK};

use crate::style::Theme;

/// Argument bundle for the row beneath the query input.
pub struct ToolbarContext<'a> {
	pub topk_choices: &'a [TopK],
	/// Index of the active choice.
	pub selected: usize,
	/// Active theme; the toggle advertises the other one.
	pub preference: ThemePreference,
	pub hint: &'a str,
	pub theme: &'a Theme,
}

/// Render the top-k selector, theme toggle and key hint.
pub fn render_toolbar(frame: &mut Frame, area: Rect, ctx: ToolbarContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let controls = toolbar_line(&ctx);
	let controls_width = controls.width() as u16;
	let [left, right] =
		Layout::horizontal([Constraint::Length(controls_width), Constraint::Min(0)]).areas(area);

	frame.render_widget(controls, left);
	frame.render_widget(
		Paragraph::new(Span::styled(ctx.hint, ctx.theme.empty_style())).alignment(Alignment::Right),
		right,
	);
}

fn toolbar_line<'a>(ctx: &ToolbarContext<'a>) -> Line<'a> {
	let theme = ctx.theme;
	let mut spans = vec![Span::styled("top-k ", theme.empty_style())];
	for (index, choice) in ctx.topk_choices.iter().enumerate() {
		if index == ctx.selected {
			spans.push(Span::styled(
				format!("[{choice}]"),
				theme.prompt_style().add_modifier(Modifier::BOLD),
			));
		} else {
			spans.push(Span::styled(format!(" {choice} "), theme.empty_style()));
		}
	}
	spans.push(Span::raw("   "));
	spans.push(Span::styled(
		format!("{} {}", ctx.preference.toggle_icon(), ctx.preference.toggle_label()),
		theme.header_style(),
	));
	Line::from(spans)
}
