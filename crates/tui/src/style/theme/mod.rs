mod builtins;
mod types;

use rankview_core::ThemePreference;

pub use builtins::{DARK, LIGHT};
pub use types::Theme;

/// Resolve the colour scheme for a persisted preference.
#[must_use]
pub fn for_preference(preference: ThemePreference) -> Theme {
	match preference {
		ThemePreference::Light => LIGHT,
		ThemePreference::Dark => DARK,
	}
}

impl Default for Theme {
	fn default() -> Self {
		for_preference(ThemePreference::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_theme_is_light() {
		assert_eq!(Theme::default(), LIGHT);
	}

	#[test]
	fn schemes_differ() {
		assert_ne!(
			for_preference(ThemePreference::Light),
			for_preference(ThemePreference::Dark)
		);
	}
}
