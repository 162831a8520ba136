use anyhow::Result;
use rankview_core::{Panel, PanelContent, ResultsView, TopK};
use serde::Serialize;

/// Everything a one-shot search leaves on screen.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport<'a> {
	pub(crate) query: &'a str,
	pub(crate) topk: TopK,
	pub(crate) bm25: &'a PanelContent,
	pub(crate) sbert: &'a PanelContent,
	pub(crate) status: &'a str,
}

impl<'a> SearchReport<'a> {
	pub(crate) fn new(query: &'a str, topk: TopK, view: &'a ResultsView) -> Self {
		Self {
			query,
			topk,
			bm25: view.panel(Panel::Bm25),
			sbert: view.panel(Panel::Sbert),
			status: view.status.text(),
		}
	}

	fn panels(&self) -> [(Panel, &'a PanelContent); 2] {
		[(Panel::Bm25, self.bm25), (Panel::Sbert, self.sbert)]
	}

	/// Whether either panel shows an error.
	pub(crate) fn is_error(&self) -> bool {
		self.bm25.is_error() || self.sbert.is_error()
	}
}

pub(crate) fn format_plain(report: &SearchReport<'_>) -> String {
	let mut out = String::new();
	for (panel, content) in report.panels() {
		out.push_str("== ");
		out.push_str(panel.title());
		out.push_str(" ==\n");
		out.push_str(&content.to_plain());
		out.push_str("\n\n");
	}
	if !report.status.is_empty() {
		out.push_str(report.status);
		out.push('\n');
	}
	out
}

pub(crate) fn format_json(report: &SearchReport<'_>) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

pub(crate) fn format_markup(report: &SearchReport<'_>) -> String {
	let mut out = String::new();
	for (panel, content) in report.panels() {
		out.push_str(&format!(
			"<section class=\"panel\" id=\"{}\">\n<h2>{}</h2>\n{}\n</section>\n",
			panel_id(panel),
			panel.title(),
			content.to_markup()
		));
	}
	out
}

fn panel_id(panel: Panel) -> &'static str {
	match panel {
		Panel::Bm25 => "bm25",
		Panel::Sbert => "sbert",
	}
}

pub(crate) fn print_plain(report: &SearchReport<'_>) {
	print!("{}", format_plain(report));
}

pub(crate) fn print_json(report: &SearchReport<'_>) -> Result<()> {
	println!("{}", format_json(report)?);
	Ok(())
}

pub(crate) fn print_markup(report: &SearchReport<'_>) {
	print!("{}", format_markup(report));
}
