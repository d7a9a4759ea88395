//! Stack serialization and restoration.
//!
//! The persisted form of a stack is a JSON array of route identifiers,
//! root-first: `["home","profile","settings"]`. Only the stack is persisted;
//! the presented modal never is.
//!
//! Restoration is all-or-nothing. A buffer that is not JSON, is not an array
//! of strings, or names an unknown route resets the stack to empty. A valid
//! prefix is never kept.

use bytes::Bytes;
use serde_json::Value;

use crate::error::RestoreError;
use crate::observer::NavigationEvent;
use crate::route::RouteIdentifier;
use crate::state::NavigationState;

/// Encoder and decoder for persisted stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateCodec;

impl StateCodec {
	/// Encodes a stack as a compact JSON array of route identifiers.
	///
	/// Encoding is deterministic and an empty stack encodes as `[]`.
	pub fn encode<R: RouteIdentifier>(path: &[R]) -> Bytes {
		let ids = path
			.iter()
			.map(|route| Value::String(route.route_id().into_owned()))
			.collect();
		Bytes::from(Value::Array(ids).to_string())
	}

	/// Decodes a buffer produced by [`encode`](Self::encode).
	///
	/// Any JSON whitespace is accepted.
	///
	/// # Errors
	///
	/// - [`RestoreError::Structural`] if the buffer is not JSON
	/// - [`RestoreError::ShapeMismatch`] if it is not an array of strings
	/// - [`RestoreError::UnknownRoute`] if an identifier maps to no route
	pub fn decode<R: RouteIdentifier>(buffer: &[u8]) -> Result<Vec<R>, RestoreError> {
		let value: Value = serde_json::from_slice(buffer)?;
		let Value::Array(items) = value else {
			return Err(RestoreError::ShapeMismatch {
				found: json_kind(&value).to_string(),
			});
		};

		items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Value::String(id) => R::from_route_id(&id).ok_or(RestoreError::UnknownRoute { index, id }),
				other => Err(RestoreError::ShapeMismatch {
					found: format!("{} at index {}", json_kind(&other), index),
				}),
			})
			.collect()
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Result of [`NavigationState::restore`].
#[derive(Debug)]
pub enum RestoreOutcome {
	/// The decoded stack replaced the current one.
	Applied {
		/// Stack depth after restoration.
		len: usize,
	},
	/// The decoded stack equals the current one; nothing changed.
	Unchanged,
	/// Decoding failed and the stack was reset to empty.
	Reset {
		/// Why decoding failed.
		error: RestoreError,
	},
}

impl RestoreOutcome {
	/// Returns `true` if the stack was replaced by the decoded one.
	pub fn is_applied(&self) -> bool {
		matches!(self, Self::Applied { .. })
	}

	/// Returns the decode error, if restoration failed.
	pub fn error(&self) -> Option<&RestoreError> {
		match self {
			Self::Reset { error } => Some(error),
			_ => None,
		}
	}
}

impl<R: RouteIdentifier> NavigationState<R> {
	/// Encodes the stack for persistence. The modal is not included.
	pub fn encode(&self) -> Bytes {
		StateCodec::encode(self.path())
	}

	/// Restores the stack from a persisted buffer.
	///
	/// On success the decoded stack replaces the current one only if it
	/// differs, so restoring the same buffer twice notifies once. On any
	/// decode failure the stack is reset to empty and the error is logged;
	/// the modal is never touched.
	pub fn restore(&mut self, buffer: &[u8]) -> RestoreOutcome {
		match StateCodec::decode::<R>(buffer) {
			Ok(path) if path.as_slice() == self.path() => RestoreOutcome::Unchanged,
			Ok(path) => {
				let len = path.len();
				self.set_path(path);
				tracing::debug!(len, "navigation state restored");
				self.emit(NavigationEvent::Restored { len });
				RestoreOutcome::Applied { len }
			}
			Err(error) => {
				let discarded = self.take_path().len();
				tracing::warn!(error = %error, discarded, "discarding unreadable navigation state");
				if discarded > 0 {
					self.emit(NavigationEvent::RestoreReset { discarded });
				}
				RestoreOutcome::Reset { error }
			}
		}
	}
}
