//! Background execution of search requests.
//!
//! The [`SearchRuntime`] owns a small tokio runtime on which requests run.
//! Finished requests come back over a channel tagged with their generation
//! id; deciding whether one is still current is left to the controller.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use anyhow::{Context, Result};
use rankview_core::{Completion, SearchClient, SearchTicket};
use tokio::runtime::{Builder, Runtime};

type Spawner = Box<dyn Fn(&Runtime, SearchTicket, Sender<Completion>) + Send>;

/// Runs tickets against a search client off the UI thread.
pub(crate) struct SearchRuntime {
	runtime: Option<Runtime>,
	spawn: Spawner,
	tx: Sender<Completion>,
	rx: Receiver<Completion>,
}

impl SearchRuntime {
	pub(crate) fn new<C>(client: C) -> Result<Self>
	where
		C: SearchClient + 'static,
	{
		let runtime = Builder::new_multi_thread()
			.worker_threads(1)
			.thread_name("rankview-search")
			.enable_all()
			.build()
			.context("failed to start search runtime")?;

		let client = Arc::new(client);
		let spawn: Spawner = Box::new(move |runtime, ticket, tx| {
			let client = Arc::clone(&client);
			runtime.spawn(async move {
				let completion = ticket.run(client.as_ref()).await;
				// The receiver only goes away when the app shuts down.
				let _ = tx.send(completion);
			});
		});

		let (tx, rx) = mpsc::channel();
		Ok(Self {
			runtime: Some(runtime),
			spawn,
			tx,
			rx,
		})
	}

	/// Start `ticket` in the background.
	pub(crate) fn spawn(&self, ticket: SearchTicket) {
		if let Some(runtime) = &self.runtime {
			(self.spawn)(runtime, ticket, self.tx.clone());
		}
	}

	pub(crate) fn try_recv(&self) -> Result<Completion, TryRecvError> {
		self.rx.try_recv()
	}

	#[cfg(test)]
	pub(crate) fn recv_timeout(
		&self,
		timeout: std::time::Duration,
	) -> Result<Completion, mpsc::RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}

	/// Abandon running requests without waiting for them.
	pub(crate) fn shutdown(&mut self) {
		if let Some(runtime) = self.runtime.take() {
			runtime.shutdown_background();
		}
	}
}

impl Drop for SearchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use rankview_core::{
		SearchController, SearchOutcome, SearchRequest, SearchResponse, TopK,
	};

	use super::*;

	struct EmptyClient;

	impl SearchClient for EmptyClient {
		async fn search(&self, _request: &SearchRequest) -> rankview_core::Result<SearchResponse> {
			Ok(SearchResponse::default())
		}
	}

	#[test]
	fn completions_come_back_over_the_channel() {
		let runtime = SearchRuntime::new(EmptyClient).expect("runtime");
		let mut controller = SearchController::new();
		let request = SearchRequest::new("query", TopK::DEFAULT).expect("request");
		let ticket = controller.begin(request);
		let id = ticket.id();

		runtime.spawn(ticket);
		let completion = runtime.recv_timeout(Duration::from_secs(5)).expect("completion");
		assert_eq!(completion.id, id);
		assert!(matches!(completion.outcome, SearchOutcome::Success(_)));
	}

	#[test]
	fn spawning_after_shutdown_is_ignored() {
		let mut runtime = SearchRuntime::new(EmptyClient).expect("runtime");
		runtime.shutdown();
		let mut controller = SearchController::new();
		let request = SearchRequest::new("query", TopK::DEFAULT).expect("request");
		runtime.spawn(controller.begin(request));
		assert!(runtime.try_recv().is_err());
	}
}
