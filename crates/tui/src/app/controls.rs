use rankview_core::TopK;

/// Cycles through the configured top-k values.
#[derive(Debug, Clone)]
pub(crate) struct TopKSelector {
	choices: Vec<TopK>,
	index: usize,
}

impl TopKSelector {
	/// `initial` is added to `choices` when missing; an empty list falls
	/// back to `initial` alone.
	pub(crate) fn new(mut choices: Vec<TopK>, initial: TopK) -> Self {
		if !choices.contains(&initial) {
			choices.push(initial);
			choices.sort_unstable();
		}
		let index = choices.iter().position(|choice| *choice == initial).unwrap_or(0);
		Self { choices, index }
	}

	pub(crate) fn current(&self) -> TopK {
		self.choices[self.index]
	}

	pub(crate) fn index(&self) -> usize {
		self.index
	}

	pub(crate) fn choices(&self) -> &[TopK] {
		&self.choices
	}

	/// Select the next choice, wrapping around.
	pub(crate) fn cycle(&mut self) -> TopK {
		self.index = (self.index + 1) % self.choices.len();
		self.current()
	}
}

/// Scroll offset shared by both result panels.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PanelScroll {
	offset: usize,
}

impl PanelScroll {
	pub(crate) fn offset(self) -> usize {
		self.offset
	}

	pub(crate) fn up(&mut self, rows: usize) {
		self.offset = self.offset.saturating_sub(rows);
	}

	pub(crate) fn down(&mut self, rows: usize) {
		self.offset = self.offset.saturating_add(rows);
	}

	/// Adopt the offset the panels could actually show.
	pub(crate) fn clamp_to(&mut self, rendered: usize) {
		self.offset = self.offset.min(rendered);
	}

	pub(crate) fn reset(&mut self) {
		self.offset = 0;
	}
}
