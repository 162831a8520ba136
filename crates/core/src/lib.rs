//! Search client core for `rankview`.
//!
//! The crate holds everything that does not depend on a terminal: the wire
//! model of the `/search` endpoint, the HTTP client, the request lifecycle
//! with cancellation, query highlighting, the panel display model and the
//! persisted theme preference.

pub mod client;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod model;
pub mod render;
pub mod status;
pub mod store;
pub mod theme;
pub mod view;

pub use client::{ClientConfig, DEFAULT_ENDPOINT, HttpSearchClient, SearchClient};
pub use controller::{Completion, SearchController, SearchOutcome, SearchTicket};
pub use error::{Result, SearchError, StoreError, ValidationError};
pub use highlight::{Highlighted, Segment, highlight};
pub use model::{ResultItem, SearchRequest, SearchResponse, TopK};
pub use render::{Notice, NoticeKind, Panel, PanelContent, RenderedItem, render_list};
pub use status::StatusLine;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{ThemeController, ThemePreference};
pub use view::{ResultsView, SearchView};
