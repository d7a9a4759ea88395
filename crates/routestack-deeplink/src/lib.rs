//! Deep-link support for routestack.
//!
//! This crate turns external URLs into routes to push onto a navigation
//! stack:
//!
//! - **Resolver contract**: [`DeepLinkResolver`] returns either the routes a
//!   URL names or [`Resolution::NotHandled`], so composing layers can tell
//!   "wrong link" from "right link, nothing to show"
//! - **Custom schemes**: [`SegmentResolver`] maps `myapp://profile/settings`
//!   to `[profile, settings]` by route identifier
//! - **Universal links**: the same resolver over `https://` domains, plus
//!   [`LinkDispatcher`] choosing between the primary and universal resolver
//!
//! # Quick Start
//!
//! ```rust
//! use routestack_deeplink::{
//! 	LinkChannel, LinkDispatcher, Resolution, SegmentResolver,
//! };
//! use url::Url;
//!
//! let dispatcher = LinkDispatcher::<String>::new()
//! 	.primary(SegmentResolver::<String>::for_scheme("testapp").unwrap())
//! 	.universal(SegmentResolver::<String>::for_hosts(&["example.com"]).unwrap())
//! 	.universal_links_enabled(true);
//!
//! let url = Url::parse("testapp://profile/settings").unwrap();
//! assert_eq!(
//! 	dispatcher.dispatch(&url, LinkChannel::infer(&url)),
//! 	Resolution::Handled(vec!["profile".to_string(), "settings".to_string()])
//! );
//!
//! let url = Url::parse("wrongapp://home").unwrap();
//! assert_eq!(dispatcher.dispatch(&url, LinkChannel::infer(&url)), Resolution::NotHandled);
//! ```

pub mod dispatch;
pub mod error;
pub mod resolver;
pub mod segment;

// Re-export main types for convenience
pub use dispatch::{LinkChannel, LinkDispatcher};
pub use error::{DeeplinkError, validate_host, validate_scheme};
pub use resolver::{BoxedResolver, DeepLinkResolver, Resolution, ResolverChain};
pub use segment::{LinkMatcher, SegmentResolver, SegmentResolverBuilder};

/// Result type for deeplink operations.
pub type DeeplinkResult<T> = Result<T, DeeplinkError>;

/// Parses a raw link handed over by the platform.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidUrl` if `link` is not a valid URL.
pub fn parse_link(link: &str) -> DeeplinkResult<url::Url> {
	Ok(url::Url::parse(link.trim())?)
}
