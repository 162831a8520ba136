use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use rankview_core::Completion;

use crate::app::state::App;

impl<'a> App<'a> {
	/// Submit the current query text with the selected top-k.
	pub(crate) fn submit_search(&mut self) {
		let query = self.search_input.text();
		let topk = self.topk.current();
		tracing::trace!(%query, %topk, "submitting search");

		if let Some(ticket) = self.controller.submit(&query, topk, &mut self.results) {
			self.scroll.reset();
			self.search.spawn(ticket);
		}
	}

	/// Cancel the request in flight. Returns `false` when there was none.
	pub(crate) fn cancel_search(&mut self) -> bool {
		self.controller.cancel()
	}

	/// Drain finished requests and apply the current one.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(completion) => self.handle_completion(completion),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		self.results.tick(Instant::now());
	}

	pub(crate) fn handle_completion(&mut self, completion: Completion) {
		if self.controller.complete(completion, &mut self.results) {
			self.scroll.reset();
		}
	}

	pub(crate) fn is_searching(&self) -> bool {
		self.controller.is_in_flight()
	}
}
