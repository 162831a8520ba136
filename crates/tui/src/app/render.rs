use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::Block;
use rankview_core::Panel;

use super::App;
use crate::components::{
	InputContext, PanelContext, StatusState, ToolbarContext, render_input, render_panel,
	render_toolbar,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let theme = self.style.theme;
		frame.render_widget(Block::default().style(theme.base_style()), frame.area());

		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, toolbar_area, panels_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		render_input(
			frame,
			InputContext {
				query_input: &self.search_input,
				prompt: &self.ui.prompt,
				placeholder: Some(&self.ui.placeholder),
				area: input_area,
				theme: &theme,
			},
			StatusState {
				status_text: self.results.status.text(),
				busy: self.is_searching(),
				throbber_state: &self.throbber_state,
			},
		);

		render_toolbar(
			frame,
			toolbar_area,
			ToolbarContext {
				topk_choices: self.topk.choices(),
				selected: self.topk.index(),
				preference: self.theme.current(),
				hint: &self.ui.hint,
				theme: &theme,
			},
		);

		let columns =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
				.split(panels_area);
		let mut shown = 0;
		for (panel, column) in Panel::ALL.into_iter().zip(columns.iter()) {
			let offset = render_panel(
				frame,
				*column,
				PanelContext {
					title: self.ui.panel_title(panel),
					content: self.results.panel(panel),
					scroll: self.scroll.offset(),
					throbber_state: &self.throbber_state,
					theme: &theme,
				},
			);
			shown = shown.max(offset);
		}
		self.scroll.clamp_to(shown);
	}
}
