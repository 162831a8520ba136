//! Wire types exchanged with the `/search` endpoint.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Number of top results requested per ranking method.
///
/// The server reads this from a form selector, so it travels as a JSON
/// string (`"5"`). Numbers are still accepted when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopK(NonZeroU32);

impl TopK {
	/// Default selector value.
	pub const DEFAULT: TopK = match NonZeroU32::new(5) {
		Some(value) => TopK(value),
		None => unreachable!(),
	};

	/// Wrap a count, returning `None` for zero.
	#[must_use]
	pub fn new(value: u32) -> Option<Self> {
		NonZeroU32::new(value).map(Self)
	}

	/// Return the raw count.
	#[must_use]
	pub fn get(self) -> u32 {
		self.0.get()
	}
}

impl Default for TopK {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for TopK {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TopK {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value: u32 = s
			.trim()
			.parse()
			.map_err(|_| format!("`{s}` is not a positive integer"))?;
		Self::new(value).ok_or_else(|| "topk must be greater than zero".to_string())
	}
}

impl Serialize for TopK {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for TopK {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Number(u32),
			Text(String),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Number(value) => {
				TopK::new(value).ok_or_else(|| serde::de::Error::custom("topk must be greater than zero"))
			}
			Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
		}
	}
}

/// Body of a `POST /search` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	/// Trimmed, non-empty query text.
	pub query: String,
	/// Number of results requested per ranking.
	pub topk: TopK,
}

impl SearchRequest {
	/// Build a request from raw user input.
	///
	/// # Errors
	///
	/// Returns [`ValidationError::EmptyQuery`] when the text is blank.
	pub fn new(query_text: &str, topk: TopK) -> Result<Self, ValidationError> {
		let query = query_text.trim();
		if query.is_empty() {
			return Err(ValidationError::EmptyQuery);
		}
		Ok(Self {
			query: query.to_string(),
			topk,
		})
	}
}

/// One ranked document record returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
	pub doc_idx: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	/// 1-based position assigned by the server.
	pub rank: u32,
}

/// Successful `/search` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub bm25: Vec<ResultItem>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sbert: Option<Vec<ResultItem>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sbert_error: Option<String>,
}

/// Best-effort error payload sent with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
	#[serde(default)]
	pub error: Option<String>,
}
