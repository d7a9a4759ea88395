//! Resolver contract and resolver composition.

use std::fmt;

use routestack_core::Route;
use url::Url;

/// Result of resolving a URL.
///
/// `NotHandled` and `Handled(vec![])` mean different things: the first says
/// the URL belongs to someone else and the next resolver should be tried,
/// the second says the URL was accepted but names no known route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<R> {
	/// The URL belongs to this resolver; these routes are appended in order.
	Handled(Vec<R>),
	/// The URL does not belong to this resolver.
	NotHandled,
}

impl<R> Resolution<R> {
	/// Returns `true` unless this is `NotHandled`.
	pub fn is_handled(&self) -> bool {
		matches!(self, Self::Handled(_))
	}

	/// Returns the resolved routes, or `None` if not handled.
	pub fn into_routes(self) -> Option<Vec<R>> {
		match self {
			Self::Handled(routes) => Some(routes),
			Self::NotHandled => None,
		}
	}
}

impl<R> From<Option<Vec<R>>> for Resolution<R> {
	fn from(routes: Option<Vec<R>>) -> Self {
		routes.map_or(Self::NotHandled, Self::Handled)
	}
}

/// Turns an external URL into routes to push.
///
/// Implemented for any `Fn(&Url) -> Resolution<R>`, so custom resolvers can
/// be plain closures.
///
/// # Example
///
/// ```rust
/// use routestack_deeplink::{DeepLinkResolver, Resolution};
/// use url::Url;
///
/// let resolver = |url: &Url| {
/// 	if url.scheme() == "shop" {
/// 		Resolution::Handled(vec![url.host_str().unwrap_or_default().to_string()])
/// 	} else {
/// 		Resolution::NotHandled
/// 	}
/// };
///
/// let url = Url::parse("shop://cart").unwrap();
/// assert_eq!(resolver.resolve(&url), Resolution::Handled(vec!["cart".to_string()]));
/// ```
pub trait DeepLinkResolver<R>: Send + Sync {
	/// Resolves `url` into routes, or declines it.
	fn resolve(&self, url: &Url) -> Resolution<R>;
}

impl<R, F> DeepLinkResolver<R> for F
where
	F: Fn(&Url) -> Resolution<R> + Send + Sync,
{
	fn resolve(&self, url: &Url) -> Resolution<R> {
		self(url)
	}
}

/// Boxed resolver as stored by composing types.
pub type BoxedResolver<R> = Box<dyn DeepLinkResolver<R>>;

/// Tries resolvers in order until one handles the URL.
pub struct ResolverChain<R> {
	resolvers: Vec<BoxedResolver<R>>,
}

impl<R> fmt::Debug for ResolverChain<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResolverChain")
			.field("resolvers", &self.resolvers.len())
			.finish()
	}
}

impl<R: Route> Default for ResolverChain<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Route> ResolverChain<R> {
	/// Creates an empty chain, which handles nothing.
	pub fn new() -> Self {
		Self {
			resolvers: Vec::new(),
		}
	}

	/// Appends a resolver to the chain.
	pub fn with<T>(mut self, resolver: T) -> Self
	where
		T: DeepLinkResolver<R> + 'static,
	{
		self.resolvers.push(Box::new(resolver));
		self
	}

	/// Returns the number of resolvers in the chain.
	pub fn len(&self) -> usize {
		self.resolvers.len()
	}

	/// Returns `true` if the chain has no resolvers.
	pub fn is_empty(&self) -> bool {
		self.resolvers.is_empty()
	}
}

impl<R: Route> DeepLinkResolver<R> for ResolverChain<R> {
	fn resolve(&self, url: &Url) -> Resolution<R> {
		self.resolvers
			.iter()
			.map(|resolver| resolver.resolve(url))
			.find(Resolution::is_handled)
			.unwrap_or(Resolution::NotHandled)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn only(scheme: &'static str, route: &'static str) -> impl Fn(&Url) -> Resolution<String> + Send + Sync {
		move |url: &Url| {
			if url.scheme() == scheme {
				Resolution::Handled(vec![route.to_string()])
			} else {
				Resolution::NotHandled
			}
		}
	}

	#[rstest]
	fn test_chain_returns_first_handled() {
		// Arrange
		let chain = ResolverChain::new()
			.with(only("alpha", "first"))
			.with(only("beta", "second"))
			.with(only("beta", "third"));
		let url = Url::parse("beta://x").unwrap();

		// Act
		let resolution = chain.resolve(&url);

		// Assert
		assert_eq!(resolution, Resolution::Handled(vec!["second".to_string()]));
	}

	#[rstest]
	fn test_chain_stops_at_empty_handled() {
		let chain = ResolverChain::new()
			.with(|_: &Url| Resolution::<String>::Handled(Vec::new()))
			.with(only("alpha", "never"));
		let url = Url::parse("alpha://x").unwrap();

		assert_eq!(chain.resolve(&url), Resolution::Handled(Vec::new()));
	}

	#[rstest]
	fn test_empty_chain_handles_nothing() {
		let chain: ResolverChain<String> = ResolverChain::new();
		let url = Url::parse("alpha://x").unwrap();

		assert!(chain.is_empty());
		assert_eq!(chain.resolve(&url), Resolution::NotHandled);
	}

	#[rstest]
	#[case(None, Resolution::NotHandled)]
	#[case(Some(vec![]), Resolution::Handled(vec![]))]
	fn test_from_option(#[case] input: Option<Vec<String>>, #[case] expected: Resolution<String>) {
		assert_eq!(Resolution::from(input), expected);
	}
}
