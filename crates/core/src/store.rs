//! Small persisted key-value stores for user preferences.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// String key-value storage that outlives the process.
pub trait KeyValueStore: Send {
	fn get(&self, key: &str) -> Option<String>;

	/// Store `value` under `key`.
	///
	/// # Errors
	///
	/// Returns [`StoreError`] when the value could not be persisted.
	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store, used in tests and when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Store persisted as a flat JSON object in a single file.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl FileStore {
	/// Open the store at `path`. A missing file starts an empty store.
	///
	/// # Errors
	///
	/// Returns [`StoreError`] if the file exists but cannot be read or parsed.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		let entries = match fs::read(&path) {
			Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
			Ok(bytes) => serde_json::from_slice(&bytes)?,
			Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
			Err(err) => return Err(err.into()),
		};
		Ok(Self { path, entries })
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let contents = serde_json::to_vec_pretty(&self.entries)?;
		fs::write(&self.path, contents)?;
		Ok(())
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value.to_string());
		self.flush()
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn memory_store_round_trips_values() {
		let mut store = MemoryStore::new();
		assert_eq!(store.get("theme"), None);
		store.set("theme", "dark").expect("set");
		assert_eq!(store.get("theme").as_deref(), Some("dark"));
	}

	#[test]
	fn file_store_persists_across_reopen() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("state.json");

		let mut store = FileStore::open(&path).expect("open missing");
		assert_eq!(store.get("theme"), None);
		store.set("theme", "dark").expect("set");

		let reopened = FileStore::open(&path).expect("reopen");
		assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
	}

	#[test]
	fn empty_file_is_an_empty_store() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("state.json");
		fs::write(&path, "\n").expect("write");
		let store = FileStore::open(&path).expect("open");
		assert_eq!(store.get("theme"), None);
	}

	#[test]
	fn corrupt_file_is_reported() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("state.json");
		fs::write(&path, "not json").expect("write");
		assert!(matches!(FileStore::open(&path), Err(StoreError::Format(_))));
	}
}
