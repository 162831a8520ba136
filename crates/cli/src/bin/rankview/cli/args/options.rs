use clap::ValueEnum;
use rankview_core::ThemePreference;

/// How one-shot results are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
	/// HTML fragment with `<mark>` emphasis.
	Markup,
}

/// Colour schemes selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl From<ThemeArg> for ThemePreference {
	fn from(value: ThemeArg) -> Self {
		match value {
			ThemeArg::Light => ThemePreference::Light,
			ThemeArg::Dark => ThemePreference::Dark,
		}
	}
}
