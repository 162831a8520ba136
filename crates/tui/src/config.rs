use rankview_core::Panel;

/// Textual configuration used when rendering the prompt and panels.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Label rendered in front of the query input.
	pub prompt: String,
	/// Placeholder shown while the query input is empty.
	pub placeholder: String,
	/// Key binding summary shown in the footer.
	pub hint: String,
	bm25_title: String,
	sbert_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt: "🔎 ".to_string(),
			placeholder: "Ask anything (e.g. Who discovered relativity?)".to_string(),
			hint: "Enter search · Ctrl+T top-k · Ctrl+L theme · Esc cancel/quit".to_string(),
			bm25_title: Panel::Bm25.title().to_string(),
			sbert_title: Panel::Sbert.title().to_string(),
		}
	}
}

impl UiLabels {
	/// Title rendered on the border of a result panel.
	#[must_use]
	pub fn panel_title(&self, panel: Panel) -> &str {
		match panel {
			Panel::Bm25 => &self.bm25_title,
			Panel::Sbert => &self.sbert_title,
		}
	}

	/// Override the title of a result panel.
	pub fn set_panel_title(&mut self, panel: Panel, title: impl Into<String>) {
		match panel {
			Panel::Bm25 => self.bm25_title = title.into(),
			Panel::Sbert => self.sbert_title = title.into(),
		}
	}
}
