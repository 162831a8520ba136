//! Light/dark theme preference and its persistence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Store key holding the preference.
pub const THEME_KEY: &str = "theme";

/// The two supported colour schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
	#[default]
	Light,
	Dark,
}

impl ThemePreference {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Icon shown on the toggle control: the scheme a press switches to.
	#[must_use]
	pub fn toggle_icon(self) -> &'static str {
		match self {
			Self::Light => "🌙",
			Self::Dark => "☀️",
		}
	}

	/// Accessible label for the toggle control.
	#[must_use]
	pub fn toggle_label(self) -> &'static str {
		match self {
			Self::Light => "Switch to dark theme",
			Self::Dark => "Switch to light theme",
		}
	}
}

impl fmt::Display for ThemePreference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemePreference {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			other => Err(format!("unknown theme `{other}` (expected `light` or `dark`)")),
		}
	}
}

/// Current theme backed by a persisted store.
pub struct ThemeController {
	store: Box<dyn KeyValueStore>,
	current: ThemePreference,
}

impl ThemeController {
	/// Load the persisted theme, defaulting to light.
	///
	/// Unrecognised stored values fall back to the default as well.
	#[must_use]
	pub fn initialize(store: Box<dyn KeyValueStore>) -> Self {
		let current = match store.get(THEME_KEY) {
			Some(value) => value.parse().unwrap_or_else(|err: String| {
				tracing::debug!(%err, "ignoring stored theme");
				ThemePreference::default()
			}),
			None => ThemePreference::default(),
		};
		tracing::debug!(theme = %current, "theme initialised");
		Self { store, current }
	}

	#[must_use]
	pub fn current(&self) -> ThemePreference {
		self.current
	}

	/// Show `preference` for this session without persisting it.
	pub fn apply(&mut self, preference: ThemePreference) {
		self.current = preference;
	}

	/// Flip the theme and persist the new value.
	///
	/// A persistence failure is logged; the in-memory theme still flips.
	pub fn toggle(&mut self) -> ThemePreference {
		self.current = self.current.toggled();
		if let Err(err) = self.store.set(THEME_KEY, self.current.as_str()) {
			tracing::warn!(%err, theme = %self.current, "failed to persist theme");
		}
		self.current
	}

	/// Read-only access to the backing store.
	#[must_use]
	pub fn store(&self) -> &dyn KeyValueStore {
		self.store.as_ref()
	}
}
