use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use rankview_core::status::DEFAULT_CLEAR_DELAY;
use rankview_core::{ClientConfig, DEFAULT_ENDPOINT, ThemePreference, TopK};
use url::Url;

use super::raw::RawConfig;

/// Validated configuration used to build the client and the UI.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) endpoint: Url,
	pub(crate) timeout: Option<Duration>,
	pub(crate) topk: TopK,
	/// Sorted, deduplicated, always contains `topk`.
	pub(crate) topk_choices: Vec<TopK>,
	pub(crate) initial_query: String,
	/// Overrides the persisted theme when set.
	pub(crate) theme: Option<ThemePreference>,
	pub(crate) status_clear_delay: Duration,
}

impl ResolvedConfig {
	pub(crate) fn client_config(&self) -> ClientConfig {
		ClientConfig {
			endpoint: self.endpoint.clone(),
			timeout: self.timeout,
		}
	}

	pub(crate) fn summary(&self) -> String {
		let choices = self
			.topk_choices
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(", ");
		let timeout = match self.timeout {
			Some(timeout) => format!("{}s", timeout.as_secs()),
			None => "none".to_string(),
		};
		let theme = match self.theme {
			Some(theme) => theme.to_string(),
			None => "(persisted)".to_string(),
		};

		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Endpoint: {}", self.endpoint),
			format!("  Timeout: {timeout}"),
			format!("  Top-k: {}", self.topk),
			format!("  Top-k choices: {choices}"),
			format!("  Theme: {theme}"),
			format!("  Status clear: {}ms", self.status_clear_delay.as_millis()),
		];
		if !self.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.initial_query));
		}
		lines.join("\n")
	}

	pub(crate) fn print_summary(&self) {
		println!("{}", self.summary());
	}
}

impl RawConfig {
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let endpoint = parse_endpoint(self.server.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
		let timeout = match self.server.timeout_secs {
			Some(0) => return Err(anyhow!("server.timeout_secs must be greater than zero")),
			Some(secs) => Some(Duration::from_secs(secs)),
			None => None,
		};

		let topk = match self.ui.topk {
			Some(value) => {
				TopK::new(value).ok_or_else(|| anyhow!("ui.topk must be greater than zero"))?
			}
			None => TopK::DEFAULT,
		};
		let topk_choices = resolve_choices(self.ui.topk_choices, topk)?;

		let theme = self
			.ui
			.theme
			.as_deref()
			.map(str::parse::<ThemePreference>)
			.transpose()
			.map_err(|err| anyhow!("invalid ui.theme: {err}"))?;

		let status_clear_delay = self
			.ui
			.status_clear_ms
			.map_or(DEFAULT_CLEAR_DELAY, Duration::from_millis);

		Ok(ResolvedConfig {
			endpoint,
			timeout,
			topk,
			topk_choices,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			status_clear_delay,
		})
	}
}

fn parse_endpoint(raw: &str) -> Result<Url> {
	let url = Url::parse(raw.trim()).with_context(|| format!("invalid server.endpoint `{raw}`"))?;
	ensure!(
		matches!(url.scheme(), "http" | "https"),
		"server.endpoint must use http or https, got `{}`",
		url.scheme()
	);
	Ok(url)
}

fn resolve_choices(raw: Option<Vec<u32>>, topk: TopK) -> Result<Vec<TopK>> {
	let values = raw.unwrap_or_else(|| vec![5, 10, 20]);
	ensure!(!values.is_empty(), "ui.topk_choices must not be empty");

	let mut choices = values
		.into_iter()
		.map(|value| {
			TopK::new(value).ok_or_else(|| anyhow!("ui.topk_choices entries must be greater than zero"))
		})
		.collect::<Result<Vec<_>>>()?;
	choices.push(topk);
	choices.sort_unstable();
	choices.dedup();
	Ok(choices)
}
