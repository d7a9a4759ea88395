//! Resolver selection for inbound links.
//!
//! A host may receive links through two channels: custom-scheme URLs
//! (`myapp://...`) and web links (`https://...`). [`LinkDispatcher`] picks
//! exactly one resolver per URL:
//!
//! | Channel | Universal links disabled | Enabled, universal resolver set | Enabled, none set |
//! |---------|--------------------------|---------------------------------|-------------------|
//! | `CustomScheme` | primary | primary | primary |
//! | `WebLink` | ignored | universal | primary |

use std::fmt;

use routestack_core::Route;
use url::Url;

use crate::resolver::{BoxedResolver, DeepLinkResolver, Resolution};

/// Channel an inbound URL arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkChannel {
	/// A custom-scheme URL opened by the platform.
	CustomScheme,
	/// A web (universal) link.
	WebLink,
}

impl LinkChannel {
	/// Classifies a URL by its scheme: `http`/`https` are web links.
	pub fn infer(url: &Url) -> Self {
		match url.scheme() {
			"http" | "https" => Self::WebLink,
			_ => Self::CustomScheme,
		}
	}
}

/// Selects the resolver for each inbound URL.
pub struct LinkDispatcher<R> {
	primary: Option<BoxedResolver<R>>,
	universal: Option<BoxedResolver<R>>,
	universal_links_enabled: bool,
}

impl<R> fmt::Debug for LinkDispatcher<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LinkDispatcher")
			.field("has_primary", &self.primary.is_some())
			.field("has_universal", &self.universal.is_some())
			.field("universal_links_enabled", &self.universal_links_enabled)
			.finish()
	}
}

impl<R: Route> Default for LinkDispatcher<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Route> LinkDispatcher<R> {
	/// Creates a dispatcher with no resolvers and universal links disabled.
	pub fn new() -> Self {
		Self {
			primary: None,
			universal: None,
			universal_links_enabled: false,
		}
	}

	/// Sets the primary resolver.
	pub fn primary<T>(mut self, resolver: T) -> Self
	where
		T: DeepLinkResolver<R> + 'static,
	{
		self.primary = Some(Box::new(resolver));
		self
	}

	/// Sets a dedicated resolver for web links.
	pub fn universal<T>(mut self, resolver: T) -> Self
	where
		T: DeepLinkResolver<R> + 'static,
	{
		self.universal = Some(Box::new(resolver));
		self
	}

	/// Enables or disables handling of web links.
	pub fn universal_links_enabled(mut self, enabled: bool) -> Self {
		self.universal_links_enabled = enabled;
		self
	}

	/// Replaces the primary resolver in place.
	pub fn set_primary(&mut self, resolver: BoxedResolver<R>) {
		self.primary = Some(resolver);
	}

	/// Replaces the universal resolver in place.
	pub fn set_universal(&mut self, resolver: BoxedResolver<R>) {
		self.universal = Some(resolver);
	}

	/// Enables or disables handling of web links in place.
	pub fn set_universal_links_enabled(&mut self, enabled: bool) {
		self.universal_links_enabled = enabled;
	}

	/// Returns `true` if web links are handled.
	pub fn is_universal_links_enabled(&self) -> bool {
		self.universal_links_enabled
	}

	/// Returns `true` if any resolver is configured.
	pub fn has_resolvers(&self) -> bool {
		self.primary.is_some() || self.universal.is_some()
	}

	/// Resolves `url` with the resolver selected for `channel`.
	pub fn dispatch(&self, url: &Url, channel: LinkChannel) -> Resolution<R> {
		let resolver = match channel {
			LinkChannel::CustomScheme => self.primary.as_ref(),
			LinkChannel::WebLink if !self.universal_links_enabled => {
				tracing::debug!(url = %url, "ignoring web link: universal links disabled");
				return Resolution::NotHandled;
			}
			LinkChannel::WebLink => self.universal.as_ref().or(self.primary.as_ref()),
		};

		let Some(resolver) = resolver else {
			tracing::debug!(url = %url, ?channel, "no deep link resolver configured");
			return Resolution::NotHandled;
		};

		let resolution = resolver.resolve(url);
		if !resolution.is_handled() {
			tracing::debug!(url = %url, ?channel, "deep link not handled");
		}
		resolution
	}
}
