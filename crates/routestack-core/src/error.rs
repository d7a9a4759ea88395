//! Error types for state restoration.

use thiserror::Error;

/// Reasons a persisted buffer cannot be restored.
///
/// These errors never escape [`NavigationState::restore`]: the stack is reset
/// to empty and the error is logged and reported through
/// [`RestoreOutcome::Reset`].
///
/// [`NavigationState::restore`]: crate::NavigationState::restore
/// [`RestoreOutcome::Reset`]: crate::RestoreOutcome::Reset
#[derive(Debug, Error)]
pub enum RestoreError {
	/// The buffer is not valid JSON.
	#[error("malformed restoration buffer: {0}")]
	Structural(#[from] serde_json::Error),

	/// The buffer is valid JSON but not an array of strings.
	#[error("restoration buffer has the wrong shape: expected an array of strings, found {found}")]
	ShapeMismatch {
		/// Description of what was found instead.
		found: String,
	},

	/// An identifier does not correspond to any known route.
	#[error("unknown route identifier {id:?} at index {index}")]
	UnknownRoute {
		/// Position of the identifier in the buffer.
		index: usize,
		/// The unrecognised identifier.
		id: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_send_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<RestoreError>();
	}

	#[rstest]
	fn test_unknown_route_message() {
		let error = RestoreError::UnknownRoute {
			index: 2,
			id: "legacy".to_string(),
		};
		let message = error.to_string();
		assert!(message.contains("\"legacy\""));
		assert!(message.contains("index 2"));
	}

	#[rstest]
	fn test_from_serde_json() {
		let json_error = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
		let error = RestoreError::from(json_error);
		assert!(matches!(error, RestoreError::Structural(_)));
		assert!(error.to_string().contains("malformed restoration buffer"));
	}
}
