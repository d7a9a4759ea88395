//! Reference resolver mapping URL segments to routes by identifier.
//!
//! Two link shapes are supported:
//!
//! - **Custom scheme**: `testapp://profile/settings`. The host and every
//!   non-empty path segment are candidates: `[profile, settings]`.
//! - **Universal link**: `https://example.com/app/profile`. The host is a
//!   registered domain, so only path segments after the optional prefix are
//!   candidates: `[profile]`.
//!
//! Each candidate is percent-decoded and looked up with
//! [`RouteIdentifier::from_route_id`]. Unknown candidates and candidates
//! that do not decode to UTF-8 are dropped. The path prefix is decoded the
//! same way before matching. Query strings and fragments are ignored.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use percent_encoding::percent_decode_str;
use routestack_core::RouteIdentifier;
use url::Url;

use crate::DeeplinkResult;
use crate::error::{DeeplinkError, validate_host, validate_scheme};
use crate::resolver::{DeepLinkResolver, Resolution};

/// Which kind of links a [`SegmentResolver`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkMatcher {
	/// Custom-scheme links with one of these (lowercase) schemes.
	Schemes(Vec<String>),
	/// `http`/`https` links to one of these (lowercase) hosts.
	Universal {
		/// Accepted domains.
		hosts: Vec<String>,
		/// Leading path segments that must be present and are skipped.
		prefix: Vec<String>,
	},
}

/// Resolver that splits a URL into segments and maps each to a route.
pub struct SegmentResolver<R> {
	matcher: LinkMatcher,
	_route: PhantomData<fn() -> R>,
}

impl<R> fmt::Debug for SegmentResolver<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SegmentResolver")
			.field("matcher", &self.matcher)
			.finish()
	}
}

impl<R> Clone for SegmentResolver<R> {
	fn clone(&self) -> Self {
		Self {
			matcher: self.matcher.clone(),
			_route: PhantomData,
		}
	}
}

impl<R: RouteIdentifier> SegmentResolver<R> {
	/// Creates a builder.
	pub fn builder() -> SegmentResolverBuilder<R> {
		SegmentResolverBuilder::new()
	}

	/// Creates a resolver for a single custom scheme.
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::InvalidScheme` if the scheme is invalid.
	pub fn for_scheme(scheme: &str) -> DeeplinkResult<Self> {
		Self::builder().scheme(scheme).build()
	}

	/// Creates a universal-link resolver for the given domains.
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::InvalidHost` if a host is invalid.
	pub fn for_hosts(hosts: &[&str]) -> DeeplinkResult<Self> {
		Self::builder().universal_hosts(hosts).build()
	}

	/// Returns what this resolver accepts.
	pub fn matcher(&self) -> &LinkMatcher {
		&self.matcher
	}

	/// Returns the candidate segments of `url`, or `None` if the URL does
	/// not belong to this resolver.
	pub fn segments<'u>(&self, url: &'u Url) -> Option<Vec<Cow<'u, str>>> {
		match &self.matcher {
			LinkMatcher::Schemes(schemes) => {
				if !schemes.iter().any(|s| s == url.scheme()) {
					return None;
				}
				let host = url.host_str().into_iter();
				let segments = host
					.chain(raw_path_segments(url))
					.filter(|segment| !segment.is_empty())
					.filter_map(decode_segment)
					.collect();
				Some(segments)
			}
			LinkMatcher::Universal { hosts, prefix } => {
				if !matches!(url.scheme(), "http" | "https") {
					return None;
				}
				let host = url.host_str()?;
				if !hosts.iter().any(|h| h.eq_ignore_ascii_case(host)) {
					return None;
				}
				let mut segments = raw_path_segments(url).filter(|segment| !segment.is_empty());
				for expected in prefix {
					match segments.next() {
						Some(segment) if decode_segment(segment).as_deref() == Some(expected.as_str()) => {}
						_ => return None,
					}
				}
				Some(segments.filter_map(decode_segment).collect())
			}
		}
	}
}

impl<R: RouteIdentifier> DeepLinkResolver<R> for SegmentResolver<R> {
	fn resolve(&self, url: &Url) -> Resolution<R> {
		let Some(segments) = self.segments(url) else {
			return Resolution::NotHandled;
		};

		let routes: Vec<R> = segments
			.iter()
			.filter_map(|segment| {
				let route = R::from_route_id(segment);
				if route.is_none() {
					tracing::debug!(segment = %segment, url = %url, "dropping unknown deep link segment");
				}
				route
			})
			.collect();
		Resolution::Handled(routes)
	}
}

fn raw_path_segments(url: &Url) -> std::str::Split<'_, char> {
	// Also covers opaque URLs such as `testapp:profile`, which have no
	// `path_segments`.
	url.path().split('/')
}

fn decode_segment(segment: &str) -> Option<Cow<'_, str>> {
	match percent_decode_str(segment).decode_utf8() {
		Ok(decoded) => Some(decoded),
		Err(error) => {
			tracing::debug!(segment, error = %error, "dropping deep link segment that is not UTF-8");
			None
		}
	}
}

/// Builder for [`SegmentResolver`].
pub struct SegmentResolverBuilder<R> {
	schemes: Vec<String>,
	hosts: Vec<String>,
	path_prefix: Option<String>,
	_route: PhantomData<fn() -> R>,
}

impl<R> fmt::Debug for SegmentResolverBuilder<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SegmentResolverBuilder")
			.field("schemes", &self.schemes)
			.field("hosts", &self.hosts)
			.field("path_prefix", &self.path_prefix)
			.finish()
	}
}

impl<R: RouteIdentifier> Default for SegmentResolverBuilder<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: RouteIdentifier> SegmentResolverBuilder<R> {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self {
			schemes: Vec::new(),
			hosts: Vec::new(),
			path_prefix: None,
			_route: PhantomData,
		}
	}

	/// Accepts a custom scheme (e.g. `testapp`).
	pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
		self.schemes.push(scheme.into());
		self
	}

	/// Accepts several custom schemes.
	pub fn schemes(mut self, schemes: &[&str]) -> Self {
		self.schemes.extend(schemes.iter().map(|s| s.to_string()));
		self
	}

	/// Accepts web links to a domain.
	pub fn universal_host(mut self, host: impl Into<String>) -> Self {
		self.hosts.push(host.into());
		self
	}

	/// Accepts web links to several domains.
	pub fn universal_hosts(mut self, hosts: &[&str]) -> Self {
		self.hosts.extend(hosts.iter().map(|h| h.to_string()));
		self
	}

	/// Only accepts web links under this path prefix (e.g. `/app`).
	pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.path_prefix = Some(prefix.into());
		self
	}

	/// Builds the resolver.
	///
	/// A resolver accepts either custom schemes or universal-link hosts, not
	/// both; mixing them returns `DeeplinkError::InvalidHost`.
	///
	/// # Errors
	///
	/// Returns an error if a scheme, host or prefix is invalid, or if
	/// nothing would be accepted.
	pub fn build(self) -> DeeplinkResult<SegmentResolver<R>> {
		let matcher = if !self.schemes.is_empty() {
			if let Some(host) = self.hosts.first() {
				return Err(DeeplinkError::InvalidHost(host.clone()));
			}
			for scheme in &self.schemes {
				validate_scheme(scheme)?;
			}
			LinkMatcher::Schemes(self.schemes.iter().map(|s| s.to_ascii_lowercase()).collect())
		} else if !self.hosts.is_empty() {
			for host in &self.hosts {
				validate_host(host)?;
			}
			let prefix = match self.path_prefix {
				Some(prefix) => parse_prefix(&prefix)?,
				None => Vec::new(),
			};
			LinkMatcher::Universal {
				hosts: self.hosts.iter().map(|h| h.to_ascii_lowercase()).collect(),
				prefix,
			}
		} else {
			return Err(DeeplinkError::NothingToAccept);
		};

		Ok(SegmentResolver {
			matcher,
			_route: PhantomData,
		})
	}
}

fn parse_prefix(prefix: &str) -> DeeplinkResult<Vec<String>> {
	if !prefix.starts_with('/') {
		return Err(DeeplinkError::InvalidPathPrefix(prefix.to_string()));
	}
	prefix
		.split('/')
		.filter(|segment| !segment.is_empty())
		.map(|segment| {
			percent_decode_str(segment)
				.decode_utf8()
				.map(Cow::into_owned)
				.map_err(|_| DeeplinkError::InvalidPathPrefix(prefix.to_string()))
		})
		.collect()
}
