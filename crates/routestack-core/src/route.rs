//! Route contract.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A navigable destination supplied by the application.
///
/// Any comparable, hashable value can be a route. The trait is blanket
/// implemented, so applications never implement it by hand.
pub trait Route: Clone + Eq + Hash + Debug + Send + 'static {}

impl<T> Route for T where T: Clone + Eq + Hash + Debug + Send + 'static {}

/// A route with a stable string identifier.
///
/// Restoration and the reference deep-link resolver map routes to and from
/// identifiers through this trait. Identifiers must round-trip:
/// `R::from_route_id(&r.route_id()) == Some(r)`.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use routestack_core::RouteIdentifier;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AppRoute {
/// 	Home,
/// 	Profile,
/// }
///
/// impl RouteIdentifier for AppRoute {
/// 	fn route_id(&self) -> Cow<'_, str> {
/// 		match self {
/// 			Self::Home => "home".into(),
/// 			Self::Profile => "profile".into(),
/// 		}
/// 	}
///
/// 	fn from_route_id(id: &str) -> Option<Self> {
/// 		match id {
/// 			"home" => Some(Self::Home),
/// 			"profile" => Some(Self::Profile),
/// 			_ => None,
/// 		}
/// 	}
/// }
///
/// assert_eq!(AppRoute::from_route_id("profile"), Some(AppRoute::Profile));
/// assert_eq!(AppRoute::from_route_id("missing"), None);
/// ```
pub trait RouteIdentifier: Route {
	/// Returns the stable identifier of this route.
	fn route_id(&self) -> Cow<'_, str>;

	/// Maps an identifier back to a route, or `None` if no route has it.
	fn from_route_id(id: &str) -> Option<Self>;
}

impl RouteIdentifier for String {
	fn route_id(&self) -> Cow<'_, str> {
		Cow::Borrowed(self.as_str())
	}

	fn from_route_id(id: &str) -> Option<Self> {
		Some(id.to_string())
	}
}
