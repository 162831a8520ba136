//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. The active one
//! follows the persisted light/dark preference.

pub mod theme;

use rankview_core::ThemePreference;

pub use theme::{DARK, LIGHT, Theme, for_preference};

/// Aggregate container for styling knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleConfig {
	/// Preference the theme was resolved from.
	pub preference: ThemePreference,
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a style configuration for the given preference.
	#[must_use]
	pub fn for_preference(preference: ThemePreference) -> Self {
		Self {
			preference,
			theme: theme::for_preference(preference),
		}
	}
}
