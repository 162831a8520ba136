//! Request lifecycle: validation, the single in-flight slot and cancellation.
//!
//! A submission is split into three steps so front-ends can drive the async
//! part however they like:
//!
//! 1. [`SearchController::submit`] validates the query, cancels whatever is
//!    in flight, shows loading panels and returns a [`SearchTicket`].
//! 2. [`SearchTicket::run`] performs the request, racing it against the
//!    ticket's cancellation token.
//! 3. [`SearchController::complete`] applies the [`Completion`], but only if
//!    it still belongs to the newest request.

use tokio_util::sync::CancellationToken;

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::model::{SearchRequest, SearchResponse, TopK};
use crate::render::{Notice, Panel, PanelContent, render_list, render_sbert};
use crate::status::{STATUS_ABORTED, STATUS_SEARCHING, done_message};
use crate::view::SearchView;

struct InFlight {
	id: u64,
	token: CancellationToken,
}

/// Owns the one in-flight request slot.
#[derive(Default)]
pub struct SearchController {
	next_id: u64,
	in_flight: Option<InFlight>,
}

impl SearchController {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate and start a search.
	///
	/// Blank queries render a validation message in both panels and return
	/// `None` without touching the request in flight. Otherwise the previous
	/// request is cancelled, both panels switch to their loading state and
	/// a ticket for the new request is returned.
	pub fn submit<V: SearchView + ?Sized>(
		&mut self,
		query_text: &str,
		topk: TopK,
		view: &mut V,
	) -> Option<SearchTicket> {
		let request = match SearchRequest::new(query_text, topk) {
			Ok(request) => request,
			Err(err) => {
				tracing::debug!("rejected blank query");
				let notice = PanelContent::Notice(Notice::error(err.to_string()));
				view.show_panels(notice.clone(), notice);
				return None;
			}
		};

		let ticket = self.begin(request);
		view.set_status(STATUS_SEARCHING.to_string());
		view.show_panels(
			PanelContent::loading(Panel::Bm25),
			PanelContent::loading(Panel::Sbert),
		);
		Some(ticket)
	}

	/// Replace the in-flight slot with a new request, cancelling the old one.
	pub fn begin(&mut self, request: SearchRequest) -> SearchTicket {
		if let Some(previous) = self.in_flight.take() {
			tracing::debug!(id = previous.id, "superseding in-flight search");
			previous.token.cancel();
		}

		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		let token = CancellationToken::new();
		self.in_flight = Some(InFlight {
			id,
			token: token.clone(),
		});

		tracing::debug!(id, topk = %request.topk, "search started");
		SearchTicket { id, request, token }
	}

	/// Cancel the request in flight without replacing it.
	///
	/// Its completion still arrives and reports [`SearchOutcome::Cancelled`].
	/// Returns `false` when nothing was in flight.
	pub fn cancel(&mut self) -> bool {
		match &self.in_flight {
			Some(in_flight) => {
				in_flight.token.cancel();
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight.is_some()
	}

	/// Whether `id` identifies the newest request.
	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.in_flight.as_ref().is_some_and(|in_flight| in_flight.id == id)
	}

	/// Apply a finished request to `view`.
	///
	/// Completions of superseded requests never touch the panels. A
	/// superseded request that was cancelled while its replacement is still
	/// running reports "Aborted" on the status line. Returns `true` when the
	/// completion was applied to the panels.
	pub fn complete<V: SearchView + ?Sized>(&mut self, completion: Completion, view: &mut V) -> bool {
		if !self.is_current(completion.id) {
			if self.in_flight.is_some() && matches!(completion.outcome, SearchOutcome::Cancelled) {
				tracing::debug!(id = completion.id, "superseded search aborted");
				view.set_status(STATUS_ABORTED.to_string());
				view.schedule_status_clear();
			} else {
				tracing::debug!(id = completion.id, "discarding stale search completion");
			}
			return false;
		}
		self.in_flight = None;
		completion.dispatch(view);
		true
	}
}

/// Permission to run one search request.
#[derive(Debug)]
pub struct SearchTicket {
	id: u64,
	request: SearchRequest,
	token: CancellationToken,
}

impl SearchTicket {
	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	#[must_use]
	pub fn request(&self) -> &SearchRequest {
		&self.request
	}

	/// Token that is cancelled when this request is superseded.
	#[must_use]
	pub fn token(&self) -> &CancellationToken {
		&self.token
	}

	/// Send the request, abandoning it as soon as the token is cancelled.
	pub async fn run<C: SearchClient>(self, client: &C) -> Completion {
		let outcome = tokio::select! {
			biased;
			() = self.token.cancelled() => SearchOutcome::Cancelled,
			result = client.search(&self.request) => match result {
				Ok(response) => SearchOutcome::Success(response),
				Err(err) => SearchOutcome::Failed(err),
			},
		};

		Completion {
			id: self.id,
			request: self.request,
			outcome,
		}
	}
}

/// How a request ended.
#[derive(Debug)]
pub enum SearchOutcome {
	Success(SearchResponse),
	Failed(SearchError),
	Cancelled,
}

/// A finished request tagged with the ticket it came from.
#[derive(Debug)]
pub struct Completion {
	pub id: u64,
	pub request: SearchRequest,
	pub outcome: SearchOutcome,
}

/// Change to the status line caused by a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
	Set(String),
	Clear,
}

/// Visible effect of a completion: new panel contents (if any) and status.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
	pub panels: Option<(PanelContent, PanelContent)>,
	pub status: StatusChange,
}

impl Completion {
	/// Map the outcome to panel contents and a status change.
	#[must_use]
	pub fn effect(&self) -> Effect {
		let query = self.request.query.as_str();
		match &self.outcome {
			SearchOutcome::Success(response) => Effect {
				panels: Some((
					render_list(Some(&response.bm25), query),
					render_sbert(response, query),
				)),
				status: StatusChange::Set(done_message(self.request.topk)),
			},
			SearchOutcome::Failed(SearchError::Http { message, .. }) => {
				let notice = PanelContent::Notice(Notice::error(format!("Error: {message}")));
				Effect {
					panels: Some((notice.clone(), notice)),
					status: StatusChange::Clear,
				}
			}
			SearchOutcome::Failed(err) => {
				let notice =
					PanelContent::Notice(Notice::error(format!("Network/Server error: {err}")));
				Effect {
					panels: Some((notice.clone(), notice)),
					status: StatusChange::Clear,
				}
			}
			SearchOutcome::Cancelled => Effect {
				panels: None,
				status: StatusChange::Set(STATUS_ABORTED.to_string()),
			},
		}
	}

	/// Apply [`Completion::effect`] to a view, then schedule the status clear.
	pub fn dispatch<V: SearchView + ?Sized>(self, view: &mut V) {
		let Effect { panels, status } = self.effect();
		match &self.outcome {
			SearchOutcome::Success(_) => tracing::debug!(id = self.id, "search finished"),
			SearchOutcome::Failed(err) => tracing::debug!(id = self.id, %err, "search failed"),
			SearchOutcome::Cancelled => tracing::debug!(id = self.id, "search aborted"),
		}

		if let Some((bm25, sbert)) = panels {
			view.show_panels(bm25, sbert);
		}
		match status {
			StatusChange::Set(text) => view.set_status(text),
			StatusChange::Clear => view.clear_status(),
		}
		view.schedule_status_clear();
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::error::Result;
	use crate::model::ResultItem;
	use crate::view::ResultsView;

	/// Client that records requests and answers from a fixed script.
	struct ScriptedClient {
		calls: AtomicUsize,
		seen: Mutex<Vec<SearchRequest>>,
		reply: fn() -> Result<SearchResponse>,
	}

	impl ScriptedClient {
		fn new(reply: fn() -> Result<SearchResponse>) -> Self {
			Self {
				calls: AtomicUsize::new(0),
				seen: Mutex::new(Vec::new()),
				reply,
			}
		}
	}

	impl SearchClient for ScriptedClient {
		async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.seen.lock().expect("lock").push(request.clone());
			(self.reply)()
		}
	}

	/// Client whose requests never resolve on their own.
	struct HangingClient;

	impl SearchClient for HangingClient {
		async fn search(&self, _request: &SearchRequest) -> Result<SearchResponse> {
			std::future::pending().await
		}
	}

	fn one_bm25_hit() -> Result<SearchResponse> {
		Ok(SearchResponse {
			bm25: vec![ResultItem {
				doc_idx: 3,
				title: Some("Doc A".into()),
				score: Some(0.987),
				snippet: Some("hello world".into()),
				rank: 1,
			}],
			sbert: None,
			sbert_error: None,
		})
	}

	fn topk(value: u32) -> TopK {
		TopK::new(value).expect("topk")
	}

	#[tokio::test]
	async fn successful_search_renders_both_panels() {
		let client = ScriptedClient::new(one_bm25_hit);
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();

		let ticket = controller
			.submit("  hello ", topk(10), &mut view)
			.expect("ticket");
		assert!(view.is_loading());
		assert_eq!(view.status.text(), STATUS_SEARCHING);

		let completion = ticket.run(&client).await;
		assert!(controller.complete(completion, &mut view));

		assert_eq!(client.calls.load(Ordering::SeqCst), 1);
		let seen = client.seen.lock().expect("lock");
		assert_eq!(seen[0].query, "hello");
		assert_eq!(seen[0].topk, topk(10));

		let PanelContent::Results(items) = &view.bm25 else {
			panic!("expected bm25 results, got {:?}", view.bm25);
		};
		assert_eq!(items[0].heading(), "1. Doc A (0.987)");
		assert_eq!(items[0].snippet.matches().collect::<Vec<_>>(), vec!["hello"]);
		assert_eq!(
			view.sbert,
			PanelContent::Notice(Notice::muted("No SBERT results."))
		);
		assert_eq!(view.status.text(), "Done · top 10");
		assert!(view.status.clear_deadline().is_some());
		assert!(!controller.is_in_flight());
	}

	#[tokio::test]
	async fn blank_query_sends_nothing() {
		let client = ScriptedClient::new(one_bm25_hit);
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();

		assert!(controller.submit("   ", topk(5), &mut view).is_none());
		assert_eq!(client.calls.load(Ordering::SeqCst), 0);
		let expected = PanelContent::Notice(Notice::error("Please enter a query."));
		assert_eq!(view.bm25, expected);
		assert_eq!(view.sbert, expected);
		assert!(!controller.is_in_flight());
	}

	#[tokio::test]
	async fn blank_query_keeps_previous_request_alive() {
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();
		let ticket = controller.submit("first", topk(5), &mut view).expect("ticket");

		assert!(controller.submit("", topk(5), &mut view).is_none());
		assert!(!ticket.token().is_cancelled());
		assert!(controller.is_current(ticket.id()));
	}

	#[tokio::test]
	async fn newer_search_cancels_and_discards_older_one() {
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();

		let first = controller.submit("first", topk(5), &mut view).expect("first");
		let first_token = first.token().clone();
		let first_run = tokio::spawn(async move { first.run(&HangingClient).await });

		let second = controller.submit("second", topk(5), &mut view).expect("second");
		assert!(first_token.is_cancelled());
		assert!(!second.token().is_cancelled());

		let stale = first_run.await.expect("join");
		assert!(matches!(stale.outcome, SearchOutcome::Cancelled));
		assert!(!controller.complete(stale, &mut view));
		assert!(view.is_loading(), "stale completion must not touch the panels");
		assert_eq!(view.status.text(), STATUS_ABORTED);
		assert!(view.status.clear_deadline().is_some());

		let fresh = second.run(&ScriptedClient::new(one_bm25_hit)).await;
		assert!(controller.complete(fresh, &mut view));
		assert!(!view.is_loading());
		assert_eq!(view.status.text(), "Done · top 5");
	}

	#[tokio::test]
	async fn late_abort_does_not_overwrite_finished_search() {
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();

		let first = controller.submit("first", topk(5), &mut view).expect("first");
		let second = controller.submit("second", topk(5), &mut view).expect("second");
		let fresh = second.run(&ScriptedClient::new(one_bm25_hit)).await;
		assert!(controller.complete(fresh, &mut view));

		let stale = first.run(&HangingClient).await;
		assert!(matches!(stale.outcome, SearchOutcome::Cancelled));
		assert!(!controller.complete(stale, &mut view));
		assert_eq!(view.status.text(), "Done · top 5");
		assert!(!view.is_loading());
	}

	#[tokio::test]
	async fn explicit_cancel_reports_aborted_without_panel_changes() {
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();
		let ticket = controller.submit("slow", topk(5), &mut view).expect("ticket");

		assert!(controller.cancel());
		let completion = ticket.run(&HangingClient).await;
		assert!(controller.complete(completion, &mut view));
		assert_eq!(view.status.text(), STATUS_ABORTED);
		assert!(view.is_loading());
		assert!(!controller.cancel());
	}

	#[tokio::test]
	async fn http_error_shows_server_message_in_both_panels() {
		let client = ScriptedClient::new(|| {
			Err(SearchError::Http {
				status: 400,
				message: "Please provide a query.".into(),
			})
		});
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();
		let ticket = controller.submit("x", topk(5), &mut view).expect("ticket");
		let completion = ticket.run(&client).await;
		controller.complete(completion, &mut view);

		let expected = PanelContent::Notice(Notice::error("Error: Please provide a query."));
		assert_eq!(view.bm25, expected);
		assert_eq!(view.sbert, expected);
		assert_eq!(view.status.text(), "");
	}

	#[tokio::test]
	async fn transport_error_is_described() {
		let client =
			ScriptedClient::new(|| Err(SearchError::Transport("connection refused".into())));
		let mut controller = SearchController::new();
		let mut view = ResultsView::default();
		let ticket = controller.submit("x", topk(5), &mut view).expect("ticket");
		controller.complete(ticket.run(&client).await, &mut view);

		assert_eq!(
			view.bm25,
			PanelContent::Notice(Notice::error("Network/Server error: connection refused"))
		);
		assert!(view.bm25.is_error());
	}

	#[test]
	fn effect_of_sbert_error_is_a_warning() {
		let completion = Completion {
			id: 1,
			request: SearchRequest::new("q", TopK::DEFAULT).expect("request"),
			outcome: SearchOutcome::Success(SearchResponse {
				bm25: vec![],
				sbert: None,
				sbert_error: Some("model missing".into()),
			}),
		};
		let effect = completion.effect();
		let (bm25, sbert) = effect.panels.expect("panels");
		assert_eq!(bm25, PanelContent::Notice(Notice::muted("No results.")));
		assert_eq!(
			sbert,
			PanelContent::Notice(Notice::warning("SBERT reranker failed: model missing"))
		);
		assert_eq!(effect.status, StatusChange::Set("Done · top 5".into()));
	}

	#[test]
	fn ids_increase_per_request() {
		let mut controller = SearchController::new();
		let a = controller.begin(SearchRequest::new("a", TopK::DEFAULT).expect("a"));
		let b = controller.begin(SearchRequest::new("b", TopK::DEFAULT).expect("b"));
		assert!(b.id() > a.id());
		assert!(!controller.is_current(a.id()));
		assert!(controller.is_current(b.id()));
	}
}
