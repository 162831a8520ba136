//! HTTP access to the retrieval server.
//!
//! [`SearchClient`] is the seam the controller is written against; the
//! production implementation is [`HttpSearchClient`], tests substitute
//! their own.

use std::error::Error as StdError;
use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::{Result, SearchError};
use crate::model::{ErrorBody, SearchRequest, SearchResponse};

/// Default endpoint of a locally running retrieval server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7860/search";

/// Something that can answer a search request.
///
/// Implementations must be cancel-safe: the controller drops the returned
/// future when a newer search supersedes it.
pub trait SearchClient: Send + Sync {
	/// Send one search request and decode the response.
	///
	/// # Errors
	///
	/// Returns [`SearchError::Http`] for non-success statuses,
	/// [`SearchError::Transport`] when no response arrived and
	/// [`SearchError::Decode`] for malformed bodies.
	fn search(
		&self,
		request: &SearchRequest,
	) -> impl Future<Output = Result<SearchResponse>> + Send;
}

/// Connection settings for [`HttpSearchClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Full URL of the `/search` endpoint.
	pub endpoint: Url,
	/// Optional overall request timeout. `None` waits indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoint: default_endpoint(),
			timeout: None,
		}
	}
}

/// Parse [`DEFAULT_ENDPOINT`].
#[must_use]
pub fn default_endpoint() -> Url {
	// The constant is a valid absolute URL.
	#[allow(clippy::unwrap_used)]
	Url::parse(DEFAULT_ENDPOINT).unwrap()
}

/// [`SearchClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	client: reqwest::Client,
	endpoint: Url,
}

impl HttpSearchClient {
	/// Build a client for the configured endpoint.
	///
	/// # Errors
	///
	/// Returns [`SearchError::Transport`] if the HTTP client cannot be built.
	pub fn new(config: &ClientConfig) -> Result<Self> {
		let mut builder = reqwest::Client::builder()
			.user_agent(concat!("rankview/", env!("CARGO_PKG_VERSION")));
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder
			.build()
			.map_err(|e| SearchError::Transport(format!("failed to build HTTP client: {e}")))?;

		Ok(Self {
			client,
			endpoint: config.endpoint.clone(),
		})
	}

	/// The endpoint requests are sent to.
	#[must_use]
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

impl SearchClient for HttpSearchClient {
	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
		tracing::trace!(query = %request.query, topk = %request.topk, "POST search");

		let response = self
			.client
			.post(self.endpoint.clone())
			.json(request)
			.send()
			.await
			.map_err(|e| SearchError::Transport(describe(&e)))?;

		let status = response.status();
		let body = response
			.bytes()
			.await
			.map_err(|e| SearchError::Transport(describe(&e)))?;

		tracing::debug!(status = status.as_u16(), bytes = body.len(), "search response received");

		if !status.is_success() {
			return Err(SearchError::Http {
				status: status.as_u16(),
				message: error_message(status, &body),
			});
		}

		serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))
	}
}

/// Pick the server's `error` field, falling back to the status text.
fn error_message(status: StatusCode, body: &[u8]) -> String {
	serde_json::from_slice::<ErrorBody>(body)
		.ok()
		.and_then(|payload| payload.error)
		.filter(|message| !message.is_empty())
		.unwrap_or_else(|| status_text(status))
}

fn status_text(status: StatusCode) -> String {
	match status.canonical_reason() {
		Some(reason) => reason.to_string(),
		None => status.as_str().to_string(),
	}
}

/// Flatten an error and its sources into one line.
fn describe(err: &(dyn StdError + 'static)) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		let text = cause.to_string();
		if !message.contains(&text) {
			message.push_str(": ");
			message.push_str(&text);
		}
		source = cause.source();
	}
	message
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_message_prefers_server_field() {
		let body = br#"{"error": "Please provide a query."}"#;
		assert_eq!(
			error_message(StatusCode::BAD_REQUEST, body),
			"Please provide a query."
		);
	}

	#[test]
	fn error_message_falls_back_to_status_text() {
		assert_eq!(
			error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
			"Internal Server Error"
		);
		assert_eq!(
			error_message(StatusCode::SERVICE_UNAVAILABLE, br#"{"detail": "x"}"#),
			"Service Unavailable"
		);
		assert_eq!(
			error_message(StatusCode::BAD_GATEWAY, br#"{"error": ""}"#),
			"Bad Gateway"
		);
	}

	#[test]
	fn unknown_status_uses_code() {
		let status = StatusCode::from_u16(599).expect("status");
		assert_eq!(status_text(status), "599");
	}

	#[test]
	fn default_config_targets_local_server() {
		let config = ClientConfig::default();
		assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
		assert!(config.timeout.is_none());
		assert!(HttpSearchClient::new(&config).is_ok());
	}
}
