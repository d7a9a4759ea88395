//! Shared fixtures for routestack-deeplink integration tests.

#![allow(dead_code)]

use std::borrow::Cow;

use routestack_core::RouteIdentifier;
use routestack_deeplink::SegmentResolver;
use rstest::fixture;

/// Routes of the `testapp` application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
	Home,
	Profile,
	Settings,
}

impl RouteIdentifier for AppRoute {
	fn route_id(&self) -> Cow<'_, str> {
		match self {
			Self::Home => Cow::Borrowed("home"),
			Self::Profile => Cow::Borrowed("profile"),
			Self::Settings => Cow::Borrowed("settings"),
		}
	}

	fn from_route_id(id: &str) -> Option<Self> {
		match id {
			"home" => Some(Self::Home),
			"profile" => Some(Self::Profile),
			"settings" => Some(Self::Settings),
			_ => None,
		}
	}
}

#[fixture]
pub fn testapp_resolver() -> SegmentResolver<AppRoute> {
	SegmentResolver::for_scheme("testapp").unwrap()
}

#[fixture]
pub fn web_resolver() -> SegmentResolver<AppRoute> {
	SegmentResolver::builder()
		.universal_hosts(&["example.com", "www.example.com"])
		.path_prefix("/app")
		.build()
		.unwrap()
}
