//! Display model for the two result panels.
//!
//! Rendering is separated from any particular front-end: a [`PanelContent`]
//! describes what a panel shows, and the terminal UI or the markup renderer
//! turn it into styled output.

use std::fmt::Write as _;

use serde::Serialize;

use crate::highlight::{Highlighted, escape_markup, highlight};
use crate::model::{ResultItem, SearchResponse};

/// Marker appended to every snippet; the server already truncated it.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// The two result panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
	/// Lexical ranking, left side.
	Bm25,
	/// Semantic re-ranking, right side.
	Sbert,
}

impl Panel {
	pub const ALL: [Panel; 2] = [Panel::Bm25, Panel::Sbert];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Panel::Bm25 => "BM25 Retrieval",
			Panel::Sbert => "SBERT Rerank",
		}
	}

	/// Text shown while a request is pending.
	#[must_use]
	pub fn loading_label(self) -> &'static str {
		match self {
			Panel::Bm25 => "Retrieving BM25...",
			Panel::Sbert => "Re-ranking with SBERT...",
		}
	}
}

/// Severity of a single-line panel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
	Muted,
	Warning,
	Error,
}

/// A one-line message occupying a whole panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub kind: NoticeKind,
	pub text: String,
}

impl Notice {
	#[must_use]
	pub fn muted(text: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Muted,
			text: text.into(),
		}
	}

	#[must_use]
	pub fn warning(text: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Warning,
			text: text.into(),
		}
	}

	#[must_use]
	pub fn error(text: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Error,
			text: text.into(),
		}
	}

	fn css_class(&self) -> &'static str {
		match self.kind {
			NoticeKind::Muted => "text-muted",
			NoticeKind::Warning => "text-warning",
			NoticeKind::Error => "text-danger",
		}
	}
}

/// One result ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
	pub rank: u32,
	pub title: String,
	pub score_label: String,
	pub snippet: Highlighted,
	pub doc_idx: u64,
}

impl RenderedItem {
	/// Build the display form of a server item, highlighting query tokens.
	#[must_use]
	pub fn from_item(item: &ResultItem, query: &str) -> Self {
		let title = item
			.title
			.clone()
			.unwrap_or_else(|| format!("Doc {}", item.doc_idx));
		let score_label = match item.score {
			Some(score) => format!("{score:.3}"),
			None => "-".to_string(),
		};
		let mut snippet = highlight(item.snippet.as_deref().unwrap_or_default(), query);
		snippet.push_plain(SNIPPET_ELLIPSIS);

		Self {
			rank: item.rank,
			title,
			score_label,
			snippet,
			doc_idx: item.doc_idx,
		}
	}

	/// `"{rank}. {title} ({score})"`
	#[must_use]
	pub fn heading(&self) -> String {
		format!("{}. {} ({})", self.rank, self.title, self.score_label)
	}

	/// `"id: {doc_idx}"`
	#[must_use]
	pub fn meta(&self) -> String {
		format!("id: {}", self.doc_idx)
	}
}

/// Everything a panel can display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "lowercase")]
pub enum PanelContent {
	/// Nothing has been searched yet.
	Idle,
	/// A request is pending.
	Loading(String),
	/// A single message: placeholder, warning or error.
	Notice(Notice),
	/// Ranked results in server order.
	Results(Vec<RenderedItem>),
}

impl PanelContent {
	#[must_use]
	pub fn loading(panel: Panel) -> Self {
		Self::Loading(panel.loading_label().to_string())
	}

	#[must_use]
	pub fn is_error(&self) -> bool {
		matches!(
			self,
			Self::Notice(Notice {
				kind: NoticeKind::Error,
				..
			})
		)
	}

	/// Plain-text rendering used by the one-shot CLI mode.
	#[must_use]
	pub fn to_plain(&self) -> String {
		match self {
			Self::Idle => String::new(),
			Self::Loading(label) => label.clone(),
			Self::Notice(notice) => notice.text.clone(),
			Self::Results(items) => {
				let mut out = String::new();
				for item in items {
					let _ = writeln!(out, "{}", item.heading());
					let _ = writeln!(out, "   {}", item.snippet.text());
					let _ = writeln!(out, "   {}", item.meta());
				}
				out.trim_end().to_string()
			}
		}
	}

	/// HTML rendering. Every server-sourced string is escaped.
	#[must_use]
	pub fn to_markup(&self) -> String {
		match self {
			Self::Idle => String::new(),
			Self::Loading(label) => format!(
				"<div class=\"loading\"><small>{}</small></div>",
				escape_markup(label)
			),
			Self::Notice(notice) => format!(
				"<p class=\"{}\">{}</p>",
				notice.css_class(),
				escape_markup(&notice.text)
			),
			Self::Results(items) => items
				.iter()
				.map(|item| {
					format!(
						"<div class=\"result-item\">\n  <h5>{}. {} <small class=\"text-muted\">({})</small></h5>\n  <p class=\"small\">{}</p>\n  <div class=\"meta small text-muted\">{}</div>\n</div>",
						item.rank,
						escape_markup(&item.title),
						escape_markup(&item.score_label),
						item.snippet.to_markup(),
						escape_markup(&item.meta()),
					)
				})
				.collect::<Vec<_>>()
				.join("\n"),
		}
	}
}

/// Render a result list, or the "No results." placeholder when empty.
#[must_use]
pub fn render_list(items: Option<&[ResultItem]>, query: &str) -> PanelContent {
	match items {
		Some(items) if !items.is_empty() => PanelContent::Results(
			items
				.iter()
				.map(|item| RenderedItem::from_item(item, query))
				.collect(),
		),
		_ => PanelContent::Notice(Notice::muted("No results.")),
	}
}

/// Render the semantic panel, falling back to the reranker error or a
/// "No SBERT results." message when no list was returned.
#[must_use]
pub fn render_sbert(response: &SearchResponse, query: &str) -> PanelContent {
	if let Some(items) = &response.sbert {
		return render_list(Some(items), query);
	}
	match &response.sbert_error {
		Some(error) => PanelContent::Notice(Notice::warning(format!(
			"SBERT reranker failed: {error}"
		))),
		None => PanelContent::Notice(Notice::muted("No SBERT results.")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(doc_idx: u64, rank: u32) -> ResultItem {
		ResultItem {
			doc_idx,
			title: None,
			score: None,
			snippet: None,
			rank,
		}
	}

	#[test]
	fn empty_list_shows_placeholder() {
		assert_eq!(
			render_list(Some(&[]), "q"),
			PanelContent::Notice(Notice::muted("No results."))
		);
		assert_eq!(
			render_list(None, "q"),
			PanelContent::Notice(Notice::muted("No results."))
		);
	}

	#[test]
	fn item_heading_uses_title_and_three_decimals() {
		let result = ResultItem {
			title: Some("Doc A".into()),
			score: Some(0.98712),
			snippet: Some("hello world".into()),
			..item(3, 1)
		};
		let rendered = RenderedItem::from_item(&result, "hello");
		assert_eq!(rendered.heading(), "1. Doc A (0.987)");
		assert_eq!(rendered.meta(), "id: 3");
		assert_eq!(rendered.snippet.text(), "hello world...");
		assert_eq!(rendered.snippet.matches().collect::<Vec<_>>(), vec!["hello"]);
	}

	#[test]
	fn missing_fields_fall_back() {
		let rendered = RenderedItem::from_item(&item(42, 2), "anything");
		assert_eq!(rendered.heading(), "2. Doc 42 (-)");
		assert_eq!(rendered.snippet.text(), "...");
	}

	#[test]
	fn server_order_is_preserved() {
		let items = vec![item(9, 3), item(1, 1), item(5, 2)];
		let PanelContent::Results(rendered) = render_list(Some(&items), "") else {
			panic!("expected results");
		};
		let ranks: Vec<u32> = rendered.iter().map(|item| item.rank).collect();
		assert_eq!(ranks, vec![3, 1, 2]);
	}

	#[test]
	fn sbert_panel_prefers_results_then_error() {
		let mut response = SearchResponse {
			bm25: vec![item(1, 1)],
			sbert: None,
			sbert_error: Some("CUDA out of memory".into()),
		};
		assert_eq!(
			render_sbert(&response, "q"),
			PanelContent::Notice(Notice::warning("SBERT reranker failed: CUDA out of memory"))
		);

		response.sbert_error = None;
		assert_eq!(
			render_sbert(&response, "q"),
			PanelContent::Notice(Notice::muted("No SBERT results."))
		);

		response.sbert = Some(vec![]);
		assert_eq!(
			render_sbert(&response, "q"),
			PanelContent::Notice(Notice::muted("No results."))
		);
	}

	#[test]
	fn markup_escapes_titles_and_snippets() {
		let result = ResultItem {
			title: Some("<b>bold</b>".into()),
			score: Some(1.0),
			snippet: Some("x < y".into()),
			..item(7, 1)
		};
		let markup = render_list(Some(&[result]), "y").to_markup();
		insta::assert_snapshot!(markup, @r#"
		<div class="result-item">
		  <h5>1. &lt;b&gt;bold&lt;/b&gt; <small class="text-muted">(1.000)</small></h5>
		  <p class="small">x &lt; <mark>y</mark>...</p>
		  <div class="meta small text-muted">id: 7</div>
		</div>
		"#);
	}

	#[test]
	fn notice_markup_uses_severity_class() {
		let markup = PanelContent::Notice(Notice::error("Error: boom")).to_markup();
		assert_eq!(markup, "<p class=\"text-danger\">Error: boom</p>");
	}

	#[test]
	fn plain_rendering_lists_heading_snippet_and_meta() {
		let result = ResultItem {
			title: Some("Doc A".into()),
			score: Some(0.5),
			snippet: Some("hello".into()),
			..item(3, 1)
		};
		let plain = render_list(Some(&[result]), "hello").to_plain();
		assert_eq!(plain, "1. Doc A (0.500)\n   hello...\n   id: 3");
	}
}
