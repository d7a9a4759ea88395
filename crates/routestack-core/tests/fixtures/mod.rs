//! Shared fixtures for routestack-core integration tests.

#![allow(dead_code)]

use std::borrow::Cow;

use routestack_core::{NavigationEvent, NavigationState, RouteIdentifier};
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Routes of a small test application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
	Home,
	Profile,
	Settings,
}

impl AppRoute {
	pub const ALL: [AppRoute; 3] = [AppRoute::Home, AppRoute::Profile, AppRoute::Settings];
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

/// Events delivered to an observer.
pub type EventLog = Arc<Mutex<Vec<NavigationEvent<AppRoute>>>>;

/// Subscribes a recording observer to `state`.
pub fn record(state: &mut NavigationState<AppRoute>) -> EventLog {
	let log: EventLog = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&log);
	state.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
	log
}

#[fixture]
pub fn empty_state() -> NavigationState<AppRoute> {
	NavigationState::new()
}

#[fixture]
pub fn deep_state() -> NavigationState<AppRoute> {
	NavigationState::with_path(vec![AppRoute::Home, AppRoute::Profile, AppRoute::Settings])
}
