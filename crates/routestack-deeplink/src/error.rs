//! Error types for deep-link configuration and handling.

use thiserror::Error;

/// Errors that can occur during deep-link configuration and handling.
///
/// A resolver declining a URL is not an error; it returns
/// [`Resolution::NotHandled`](crate::Resolution::NotHandled).
#[derive(Debug, Error)]
pub enum DeeplinkError {
	/// An inbound link could not be parsed as a URL.
	#[error("invalid deep link URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	/// Invalid custom URL scheme.
	///
	/// Schemes must start with an ASCII letter followed by letters, digits,
	/// `+`, `-` or `.`.
	#[error("invalid URL scheme: {0:?}. Expected a letter followed by letters, digits, '+', '-' or '.'")]
	InvalidScheme(String),

	/// Invalid universal-link host.
	#[error("invalid universal link host: {0:?}")]
	InvalidHost(String),

	/// Invalid universal-link path prefix.
	///
	/// Prefixes must start with `/`.
	#[error("invalid universal link path prefix: {0:?}. Expected a path starting with '/'")]
	InvalidPathPrefix(String),

	/// A resolver was built without any scheme or host to accept.
	#[error("resolver accepts no URLs: at least one scheme or host is required")]
	NothingToAccept,
}

/// Validates a custom URL scheme.
///
/// Valid schemes follow RFC 3986: an ASCII letter followed by letters,
/// digits, `+`, `-` or `.`. Web schemes (`http`, `https`) are rejected, since
/// web links go through universal-link resolution.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidScheme` if the format is invalid.
pub fn validate_scheme(scheme: &str) -> Result<(), DeeplinkError> {
	let mut chars = scheme.chars();

	// Must start with a letter
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {}
		_ => return Err(DeeplinkError::InvalidScheme(scheme.to_string())),
	}

	if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
		return Err(DeeplinkError::InvalidScheme(scheme.to_string()));
	}

	if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
		return Err(DeeplinkError::InvalidScheme(scheme.to_string()));
	}

	Ok(())
}

/// Validates a universal-link host.
///
/// The host must be a bare domain: no scheme, port, path or whitespace.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidHost` if the format is invalid.
pub fn validate_host(host: &str) -> Result<(), DeeplinkError> {
	let valid = !host.is_empty()
		&& !host.starts_with('.')
		&& !host.ends_with('.')
		&& host
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'));

	if valid {
		Ok(())
	} else {
		Err(DeeplinkError::InvalidHost(host.to_string()))
	}
}
