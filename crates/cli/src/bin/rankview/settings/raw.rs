use serde::Deserialize;

use crate::cli::CliArgs;

/// Configuration as merged from files and environment, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) server: ServerSection,
	pub(super) ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServerSection {
	pub(super) endpoint: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) topk: Option<u32>,
	pub(super) topk_choices: Option<Vec<u32>>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) status_clear_ms: Option<u64>,
}

impl RawConfig {
	/// Command-line flags win over every other source.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.server.endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.server.timeout_secs = Some(timeout);
		}
		if let Some(topk) = cli.topk {
			self.ui.topk = Some(topk);
		}
		if let Some(choices) = &cli.topk_choices {
			self.ui.topk_choices = Some(choices.clone());
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme {
			let preference: rankview_core::ThemePreference = theme.into();
			self.ui.theme = Some(preference.to_string());
		}
		if let Some(delay) = cli.status_clear_ms {
			self.ui.status_clear_ms = Some(delay);
		}
	}
}
