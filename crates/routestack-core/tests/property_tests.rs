//! Property tests for stack ordering and the restoration round trip.

use proptest::prelude::*;
use routestack_core::{NavigationState, RestoreOutcome, StateCodec};

mod fixtures;
use fixtures::AppRoute;

fn app_route() -> impl Strategy<Value = AppRoute> {
	prop::sample::select(AppRoute::ALL.to_vec())
}

proptest! {
	#[test]
	fn navigate_preserves_order(routes in prop::collection::vec(app_route(), 0..32)) {
		let mut state = NavigationState::new();
		for route in &routes {
			state.navigate(*route);
		}
		prop_assert_eq!(state.path(), routes.as_slice());
	}

	#[test]
	fn go_back_removes_exactly_last(routes in prop::collection::vec(app_route(), 0..32)) {
		let mut state = NavigationState::with_path(routes.clone());
		state.go_back();
		let expected = &routes[..routes.len().saturating_sub(1)];
		prop_assert_eq!(state.path(), expected);
	}

	#[test]
	fn decode_inverts_encode(routes in prop::collection::vec(app_route(), 0..32)) {
		let buffer = StateCodec::encode(&routes);
		let decoded: Vec<AppRoute> = StateCodec::decode(&buffer).unwrap();
		prop_assert_eq!(decoded, routes);
	}

	#[test]
	fn garbage_restores_to_empty(
		routes in prop::collection::vec(app_route(), 1..8),
		garbage in "[^\\[\\]\"]{1,16}",
	) {
		let mut state = NavigationState::with_path(routes);
		let outcome = state.restore(garbage.as_bytes());
		prop_assert!(state.is_empty());
		let reset = matches!(outcome, RestoreOutcome::Reset { .. });
		prop_assert!(reset, "expected reset, got {:?}", outcome);
	}
}
