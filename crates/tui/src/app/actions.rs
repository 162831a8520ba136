use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

/// Rows moved by `PageUp`/`PageDown`.
const PAGE_ROWS: usize = 10;

impl<'a> App<'a> {
	/// Process a key press. Returns `true` when the user asked to quit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return true,
			KeyCode::Esc => {
				// First press aborts a running search, the next one quits.
				if !self.cancel_search() {
					return true;
				}
			}
			KeyCode::Enter => self.submit_search(),
			KeyCode::Char('t') if ctrl => {
				let topk = self.topk.cycle();
				tracing::debug!(%topk, "top-k changed");
			}
			KeyCode::Char('l') if ctrl => self.toggle_theme(),
			KeyCode::Up => self.scroll.up(1),
			KeyCode::Down => self.scroll.down(1),
			KeyCode::PageUp => self.scroll.up(PAGE_ROWS),
			KeyCode::PageDown => self.scroll.down(PAGE_ROWS),
			_ => {
				self.search_input.input(key);
			}
		}
		false
	}
}
