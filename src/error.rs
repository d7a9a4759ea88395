//! Error types for the router facade.

use thiserror::Error;

use routestack_deeplink::DeeplinkError;

/// Errors reported by a [`StateStore`](crate::StateStore).
#[derive(Debug, Error)]
pub enum StoreError {
	/// The underlying storage failed.
	#[error("state store I/O failed: {0}")]
	Io(#[from] std::io::Error),

	/// The store is not available, e.g. not yet opened by the host.
	#[error("state store unavailable: {0}")]
	Unavailable(String),
}

/// Errors that can occur while configuring or driving a [`Router`](crate::Router).
///
/// Navigation operations themselves never fail; these errors come from
/// configuration, link parsing and explicit persistence calls.
#[derive(Debug, Error)]
pub enum RouterError {
	/// The router configuration could not be parsed.
	#[error("invalid router configuration: {0}")]
	Config(#[from] toml::de::Error),

	/// The router configuration could not be serialized.
	#[error("failed to serialize router configuration: {0}")]
	ConfigSerialization(#[from] toml::ser::Error),

	/// A restoration key is empty or contains only whitespace.
	#[error("restoration key must not be empty")]
	EmptyRestorationKey,

	/// Deep-link configuration or URL parsing failed.
	#[error(transparent)]
	Deeplink(#[from] DeeplinkError),

	/// Reading or writing persisted state failed.
	#[error(transparent)]
	Store(#[from] StoreError),

	/// Persistence was requested but no restoration key is configured.
	#[error("state restoration is not configured")]
	RestorationDisabled,
}

/// Result type alias for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
