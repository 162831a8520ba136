use std::path::Path;

use anyhow::{Context, Result};
use rankview_core::{
	FileStore, HttpSearchClient, KeyValueStore, MemoryStore, ResultsView, SearchController,
	StatusLine, ThemeController,
};
use rankview_tui::AppOptions;

use crate::cli::{OutputFormat, SearchReport, print_json, print_markup, print_plain};
use crate::settings::ResolvedConfig;

const STATE_FILE: &str = "state.json";

/// Builds the client and runs either the terminal UI or a single search.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	client: HttpSearchClient,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let client = HttpSearchClient::new(&config.client_config())
			.context("failed to build HTTP client")?;
		Ok(Self { config, client })
	}

	/// Run the interactive client until the user quits.
	pub(crate) fn run_interactive(self, data_dir: Option<&Path>) -> Result<()> {
		let Self { config, client } = self;

		let mut theme = ThemeController::initialize(open_state_store(data_dir));
		if let Some(preference) = config.theme {
			theme.apply(preference);
		}

		let options = AppOptions {
			initial_query: config.initial_query,
			topk: config.topk,
			topk_choices: config.topk_choices,
			status_clear_delay: config.status_clear_delay,
			..AppOptions::default()
		};
		rankview_tui::run(client, theme, options)
	}

	/// Submit the configured query once and print both panels.
	///
	/// Returns `true` when the panels ended up showing an error.
	pub(crate) fn run_once(self, format: OutputFormat) -> Result<bool> {
		let Self { config, client } = self;
		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()
			.context("failed to start async runtime")?;

		let mut controller = SearchController::new();
		let mut view = ResultsView::new(StatusLine::new(config.status_clear_delay));
		if let Some(ticket) = controller.submit(&config.initial_query, config.topk, &mut view) {
			let completion = runtime.block_on(ticket.run(&client));
			controller.complete(completion, &mut view);
		}

		let report = SearchReport::new(config.initial_query.trim(), config.topk, &view);
		match format {
			OutputFormat::Plain => print_plain(&report),
			OutputFormat::Json => print_json(&report)?,
			OutputFormat::Markup => print_markup(&report),
		}
		Ok(report.is_error())
	}
}

/// Persisted UI state, or an in-memory store when the file is unusable.
fn open_state_store(data_dir: Option<&Path>) -> Box<dyn KeyValueStore> {
	let Some(dir) = data_dir else {
		return Box::new(MemoryStore::new());
	};
	let path = dir.join(STATE_FILE);
	match FileStore::open(path.clone()) {
		Ok(store) => Box::new(store),
		Err(err) => {
			tracing::warn!(path = %path.display(), %err, "ignoring unreadable state file");
			Box::new(MemoryStore::new())
		}
	}
}
