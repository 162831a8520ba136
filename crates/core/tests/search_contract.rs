//! Contract tests for the `/search` endpoint.
//!
//! A wiremock server stands in for the retrieval service so the request
//! body, response decoding and error mapping are checked over real HTTP.

use std::time::Duration;

use rankview_core::controller::SearchOutcome;
use rankview_core::{
	ClientConfig, HttpSearchClient, Notice, PanelContent, ResultsView, SearchClient,
	SearchController, SearchError, SearchRequest, TopK,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpSearchClient {
	let endpoint = Url::parse(&format!("{}/search", server.uri())).expect("endpoint");
	HttpSearchClient::new(&ClientConfig {
		endpoint,
		timeout: None,
	})
	.expect("client")
}

fn topk(value: u32) -> TopK {
	TopK::new(value).expect("topk")
}

#[tokio::test]
async fn posts_trimmed_query_and_topk_once() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.and(header("content-type", "application/json"))
		.and(body_json(json!({"query": "relativity", "topk": "10"})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"bm25": [], "sbert": []})))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let mut controller = SearchController::new();
	let mut view = ResultsView::default();
	let ticket = controller
		.submit("  relativity \n", topk(10), &mut view)
		.expect("ticket");
	let completion = ticket.run(&client).await;
	assert!(controller.complete(completion, &mut view));

	assert_eq!(view.bm25, PanelContent::Notice(Notice::muted("No results.")));
	assert_eq!(view.sbert, PanelContent::Notice(Notice::muted("No results.")));
}

#[tokio::test]
async fn decodes_both_rankings() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"bm25": [
				{"rank": 1, "doc_idx": 3, "title": "Doc A", "score": 12.5, "snippet": "hello world"},
				{"rank": 2, "doc_idx": 8, "score": 3.25, "snippet": "world peace"}
			],
			"sbert": [
				{"rank": 1, "doc_idx": 8, "score": 0.91, "snippet": "world peace"}
			]
		})))
		.mount(&server)
		.await;

	let client = client_for(&server);
	let request = SearchRequest::new("world", topk(5)).expect("request");
	let response = client.search(&request).await.expect("response");

	assert_eq!(response.bm25.len(), 2);
	assert_eq!(response.bm25[1].title, None);
	let sbert = response.sbert.expect("sbert");
	assert_eq!(sbert[0].doc_idx, 8);
	assert_eq!(sbert[0].score, Some(0.91));
}

#[tokio::test]
async fn sbert_error_becomes_warning() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"bm25": [{"rank": 1, "doc_idx": 0, "snippet": "x"}],
			"sbert_error": "model failed to load"
		})))
		.mount(&server)
		.await;

	let client = client_for(&server);
	let mut controller = SearchController::new();
	let mut view = ResultsView::default();
	let ticket = controller.submit("x", topk(5), &mut view).expect("ticket");
	controller.complete(ticket.run(&client).await, &mut view);

	assert_eq!(
		view.sbert,
		PanelContent::Notice(Notice::warning("SBERT reranker failed: model failed to load"))
	);
	assert_eq!(view.status.text(), "Done · top 5");
}

#[tokio::test]
async fn error_payload_is_surfaced() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(
			ResponseTemplate::new(400).set_body_json(json!({"error": "Please provide a query."})),
		)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let request = SearchRequest::new("x", topk(5)).expect("request");
	let err = client.search(&request).await.expect_err("http error");
	match err {
		SearchError::Http { status, message } => {
			assert_eq!(status, 400);
			assert_eq!(message, "Please provide a query.");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn unparseable_error_falls_back_to_status_text() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(ResponseTemplate::new(500).set_body_string("Traceback (most recent call last)"))
		.mount(&server)
		.await;

	let client = client_for(&server);
	let mut controller = SearchController::new();
	let mut view = ResultsView::default();
	let ticket = controller.submit("x", topk(5), &mut view).expect("ticket");
	controller.complete(ticket.run(&client).await, &mut view);

	let expected = PanelContent::Notice(Notice::error("Error: Internal Server Error"));
	assert_eq!(view.bm25, expected);
	assert_eq!(view.sbert, expected);
	assert_eq!(view.status.text(), "");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
		.mount(&server)
		.await;

	let client = client_for(&server);
	let request = SearchRequest::new("x", topk(5)).expect("request");
	let err = client.search(&request).await.expect_err("decode error");
	assert!(matches!(err, SearchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
	let port = listener.local_addr().expect("addr").port();
	drop(listener);

	let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/search")).expect("endpoint");
	let client = HttpSearchClient::new(&ClientConfig {
		endpoint,
		timeout: Some(Duration::from_secs(5)),
	})
	.expect("client");

	let request = SearchRequest::new("x", topk(5)).expect("request");
	let err = client.search(&request).await.expect_err("transport error");
	assert!(matches!(err, SearchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn superseded_request_never_reaches_the_panels() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.and(body_json(json!({"query": "slow", "topk": "5"})))
		.respond_with(
			ResponseTemplate::new(200)
				.set_delay(Duration::from_secs(5))
				.set_body_json(json!({"bm25": [{"rank": 1, "doc_idx": 1, "title": "Slow"}]})),
		)
		.mount(&server)
		.await;
	Mock::given(method("POST"))
		.and(path("/search"))
		.and(body_json(json!({"query": "fast", "topk": "5"})))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({"bm25": [{"rank": 1, "doc_idx": 2, "title": "Fast"}]})),
		)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let mut controller = SearchController::new();
	let mut view = ResultsView::default();

	let slow = controller.submit("slow", topk(5), &mut view).expect("slow");
	let slow_client = client.clone();
	let slow_task = tokio::spawn(async move { slow.run(&slow_client).await });
	// Let the slow request reach the server before superseding it.
	tokio::time::sleep(Duration::from_millis(50)).await;

	let fast = controller.submit("fast", topk(5), &mut view).expect("fast");
	let fast_completion = fast.run(&client).await;
	assert!(controller.complete(fast_completion, &mut view));

	let slow_completion = tokio::time::timeout(Duration::from_secs(1), slow_task)
		.await
		.expect("cancelled promptly")
		.expect("join");
	assert!(matches!(slow_completion.outcome, SearchOutcome::Cancelled));
	assert!(!controller.complete(slow_completion, &mut view));
	assert_eq!(view.status.text(), "Done · top 5");

	let PanelContent::Results(items) = &view.bm25 else {
		panic!("expected results, got {:?}", view.bm25);
	};
	assert_eq!(items.len(), 1);
	assert_eq!(items[0].title, "Fast");
}
