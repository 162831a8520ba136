//! Error types for the search client.
//!
//! Messages are written so they can be shown verbatim inside a result panel.

/// Failures that can end a search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
	/// The server answered with a non-success status.
	///
	/// `message` is the server-provided `error` field when one could be
	/// decoded, otherwise the canonical status text.
	#[error("{message}")]
	Http {
		/// Numeric HTTP status code.
		status: u16,
		/// Human readable reason.
		message: String,
	},

	/// The request never produced a response (connection refused, DNS, ...).
	#[error("{0}")]
	Transport(String),

	/// The response body could not be decoded as a search response.
	#[error("invalid response body: {0}")]
	Decode(String),
}

/// Rejection raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// The query was empty after trimming.
	#[error("Please enter a query.")]
	EmptyQuery,
}

/// Errors from the persisted key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// Reading or writing the backing file failed.
	#[error("store I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The backing file did not contain a JSON object of strings.
	#[error("store format error: {0}")]
	Format(#[from] serde_json::Error),
}

/// Convenience alias for search results.
pub type Result<T> = std::result::Result<T, SearchError>;
