//! Query-term highlighting for result snippets.
//!
//! [`highlight`] splits a snippet into plain and emphasised [`Segment`]s.
//! Front-ends decide how emphasis looks: the terminal UI maps it to a theme
//! style, [`Highlighted::to_markup`] wraps it in `<mark>` after escaping.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A run of text that is either plain or matched by a query token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
	pub text: String,
	pub emphasized: bool,
}

impl Segment {
	fn plain(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			emphasized: false,
		}
	}

	fn emphasized(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			emphasized: true,
		}
	}
}

/// Text split into highlighted segments, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlighted {
	segments: Vec<Segment>,
}

impl Highlighted {
	/// Wrap text without any emphasis.
	#[must_use]
	pub fn plain(text: impl Into<String>) -> Self {
		let text = text.into();
		let mut highlighted = Self::default();
		if !text.is_empty() {
			highlighted.segments.push(Segment::plain(text));
		}
		highlighted
	}

	/// Segments in display order.
	#[must_use]
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Append unemphasised text, merging with a trailing plain segment.
	pub fn push_plain(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		match self.segments.last_mut() {
			Some(last) if !last.emphasized => last.text.push_str(text),
			_ => self.segments.push(Segment::plain(text)),
		}
	}

	/// Iterate over the emphasised fragments only.
	pub fn matches(&self) -> impl Iterator<Item = &str> {
		self.segments
			.iter()
			.filter(|segment| segment.emphasized)
			.map(|segment| segment.text.as_str())
	}

	/// Concatenate all segments back into the original text.
	#[must_use]
	pub fn text(&self) -> String {
		self.segments.iter().map(|segment| segment.text.as_str()).collect()
	}

	/// Render as HTML, escaping every segment and marking matches.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let mut out = String::new();
		for segment in &self.segments {
			if segment.emphasized {
				out.push_str("<mark>");
				out.push_str(&escape_markup(&segment.text));
				out.push_str("</mark>");
			} else {
				out.push_str(&escape_markup(&segment.text));
			}
		}
		out
	}
}

/// Build the case-insensitive alternation used to find query tokens.
///
/// Returns `None` when the query contains no tokens. Tokens are escaped so
/// that regex metacharacters match literally.
#[must_use]
pub fn query_pattern(query: &str) -> Option<Regex> {
	let tokens: Vec<String> = query.split_whitespace().map(regex::escape).collect();
	if tokens.is_empty() {
		return None;
	}

	let pattern = format!("({})", tokens.join("|"));
	match RegexBuilder::new(&pattern).case_insensitive(true).build() {
		Ok(regex) => Some(regex),
		Err(err) => {
			tracing::debug!(%err, "query pattern rejected, skipping highlight");
			None
		}
	}
}

/// Split `text` into segments, emphasising every occurrence of a query token.
///
/// Matching is case-insensitive, substring based and scans left to right;
/// the first token that matches at a position wins.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Highlighted {
	if query.is_empty() {
		return Highlighted::plain(text);
	}
	let Some(pattern) = query_pattern(query) else {
		return Highlighted::plain(text);
	};

	let mut highlighted = Highlighted::default();
	let mut cursor = 0;
	for found in pattern.find_iter(text) {
		if found.start() > cursor {
			highlighted
				.segments
				.push(Segment::plain(&text[cursor..found.start()]));
		}
		highlighted.segments.push(Segment::emphasized(found.as_str()));
		cursor = found.end();
	}
	if cursor < text.len() {
		highlighted.segments.push(Segment::plain(&text[cursor..]));
	}
	highlighted
}

/// Escape the characters that are significant in HTML text and attributes.
#[must_use]
pub fn escape_markup(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}
