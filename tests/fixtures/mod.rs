//! Shared fixtures for routestack integration tests.

#![allow(dead_code)]

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use routestack::{
	MemoryStore, NavigationEvent, RestorationKey, RouteIdentifier, Router, SegmentResolver,
	StateStore, StoreError,
};
use rstest::fixture;

/// Routes of a small test application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
	Home,
	Profile,
	Settings,
	Compose,
}

impl RouteIdentifier for AppRoute {
	fn route_id(&self) -> Cow<'_, str> {
		Cow::Borrowed(match self {
			Self::Home => "home",
			Self::Profile => "profile",
			Self::Settings => "settings",
			Self::Compose => "compose",
		})
	}

	fn from_route_id(id: &str) -> Option<Self> {
		match id {
			"home" => Some(Self::Home),
			"profile" => Some(Self::Profile),
			"settings" => Some(Self::Settings),
			"compose" => Some(Self::Compose),
			_ => None,
		}
	}
}

/// Events delivered to an observer.
pub type EventLog = Arc<Mutex<Vec<NavigationEvent<AppRoute>>>>;

/// Subscribes a recording observer to `router`.
pub fn record(router: &mut Router<AppRoute>) -> EventLog {
	let log: EventLog = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&log);
	router.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
	log
}

/// Store whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl StateStore for FailingStore {
	fn load(&self, _key: &RestorationKey) -> Result<Option<Bytes>, StoreError> {
		Err(StoreError::Unavailable("offline".to_string()))
	}

	fn save(&self, _key: &RestorationKey, _buffer: Bytes) -> Result<(), StoreError> {
		Err(StoreError::Unavailable("offline".to_string()))
	}
}

#[fixture]
pub fn key() -> RestorationKey {
	RestorationKey::new("main-tab").unwrap()
}

#[fixture]
pub fn store() -> Arc<MemoryStore> {
	Arc::new(MemoryStore::new())
}

#[fixture]
pub fn router() -> Router<AppRoute> {
	Router::new().with_deep_links(SegmentResolver::<AppRoute>::for_scheme("testapp").unwrap())
}
