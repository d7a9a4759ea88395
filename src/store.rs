//! Persisted-buffer storage capability.
//!
//! The router only exchanges encoded buffers with a [`StateStore`]; where
//! the buffer ends up is the host's concern. [`MemoryStore`] keeps buffers
//! in process and is shared between navigation scopes through `Arc`.

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{RouterError, RouterResult, StoreError};

/// Key under which a navigation scope persists its stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RestorationKey(String);

impl RestorationKey {
	/// Creates a key.
	///
	/// # Errors
	///
	/// Returns `RouterError::EmptyRestorationKey` if `key` is blank.
	pub fn new(key: impl Into<String>) -> RouterResult<Self> {
		let key = key.into();
		if key.trim().is_empty() {
			return Err(RouterError::EmptyRestorationKey);
		}
		Ok(Self(key))
	}

	/// Returns the key as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for RestorationKey {
	type Error = RouterError;

	fn try_from(key: String) -> Result<Self, Self::Error> {
		Self::new(key)
	}
}

impl From<RestorationKey> for String {
	fn from(key: RestorationKey) -> Self {
		key.0
	}
}

impl fmt::Display for RestorationKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Host-provided read/write access to persisted navigation buffers.
pub trait StateStore: Send + Sync {
	/// Loads the buffer saved under `key`, if any.
	fn load(&self, key: &RestorationKey) -> Result<Option<Bytes>, StoreError>;

	/// Saves `buffer` under `key`, replacing any previous buffer.
	fn save(&self, key: &RestorationKey, buffer: Bytes) -> Result<(), StoreError>;
}

/// In-process [`StateStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
	buffers: RwLock<HashMap<RestorationKey, Bytes>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the buffer saved under `key` without going through the trait.
	pub fn get(&self, key: &RestorationKey) -> Option<Bytes> {
		self.buffers.read().get(key).cloned()
	}

	/// Stores a buffer directly, e.g. to seed state in tests.
	pub fn insert(&self, key: RestorationKey, buffer: impl Into<Bytes>) {
		self.buffers.write().insert(key, buffer.into());
	}

	/// Returns the number of saved buffers.
	pub fn len(&self) -> usize {
		self.buffers.read().len()
	}

	/// Returns `true` if nothing is saved.
	pub fn is_empty(&self) -> bool {
		self.buffers.read().is_empty()
	}
}

impl StateStore for MemoryStore {
	fn load(&self, key: &RestorationKey) -> Result<Option<Bytes>, StoreError> {
		Ok(self.get(key))
	}

	fn save(&self, key: &RestorationKey, buffer: Bytes) -> Result<(), StoreError> {
		self.buffers.write().insert(key.clone(), buffer);
		Ok(())
	}
}
