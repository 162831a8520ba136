//! Core state container for the terminal front-end.
//!
//! The [`App`] bundles the query input, the search controller with the
//! panels it drives, and the UI-only state around them (top-k selector,
//! theme, scroll position).

use std::time::Duration;

use anyhow::Result;
use rankview_core::{
	ResultsView, SearchClient, SearchController, StatusLine, ThemeController, TopK,
	status::DEFAULT_CLEAR_DELAY,
};
use throbber_widgets_tui::ThrobberState;

use super::SearchRuntime;
use super::controls::{PanelScroll, TopKSelector};
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::StyleConfig;

/// Start-up options for [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
	/// Text pre-filled in the query input.
	pub initial_query: String,
	/// Top-k selected on start.
	pub topk: TopK,
	/// Values the top-k selector cycles through.
	pub topk_choices: Vec<TopK>,
	/// How long a finished request's status stays visible.
	pub status_clear_delay: Duration,
	pub labels: UiLabels,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			initial_query: String::new(),
			topk: TopK::DEFAULT,
			topk_choices: [5, 10, 20].into_iter().filter_map(TopK::new).collect(),
			status_clear_delay: DEFAULT_CLEAR_DELAY,
			labels: UiLabels::default(),
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input for the query.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) theme: ThemeController,
	pub(crate) controller: SearchController,
	pub(crate) results: ResultsView,
	pub(crate) topk: TopKSelector,
	pub(crate) scroll: PanelScroll,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) search: SearchRuntime,
}

impl<'a> App<'a> {
	/// Build an application that sends its searches through `client`.
	pub fn new<C>(client: C, theme: ThemeController, options: AppOptions) -> Result<Self>
	where
		C: SearchClient + 'static,
	{
		let AppOptions {
			initial_query,
			topk,
			topk_choices,
			status_clear_delay,
			labels,
		} = options;

		let style = StyleConfig::for_preference(theme.current());
		Ok(Self {
			search_input: QueryInput::new(initial_query),
			ui: labels,
			style,
			theme,
			controller: SearchController::new(),
			results: ResultsView::new(StatusLine::new(status_clear_delay)),
			topk: TopKSelector::new(topk_choices, topk),
			scroll: PanelScroll::default(),
			throbber_state: ThrobberState::default(),
			search: SearchRuntime::new(client)?,
		})
	}

	/// Focus the query input and apply the persisted theme.
	pub fn initialize(&mut self) {
		self.search_input.set_focused(true);
		self.apply_theme();
	}

	/// Flip between light and dark, persisting the new preference.
	pub fn toggle_theme(&mut self) {
		self.theme.toggle();
		self.apply_theme();
	}

	fn apply_theme(&mut self) {
		self.style = StyleConfig::for_preference(self.theme.current());
		self.search_input.set_style(self.style.theme.prompt_style());
	}

	/// Panels and status line as currently displayed.
	#[must_use]
	pub fn results(&self) -> &ResultsView {
		&self.results
	}

	/// Top-k sent with the next submission.
	#[must_use]
	pub fn selected_topk(&self) -> TopK {
		self.topk.current()
	}

	#[must_use]
	pub fn theme_controller(&self) -> &ThemeController {
		&self.theme
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.controller.cancel();
		self.search.shutdown();
	}
}
