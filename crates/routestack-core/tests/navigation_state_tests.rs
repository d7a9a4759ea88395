//! Navigation state tests
//!
//! Covers stack operations, the single-modal rule and change notification
//! through the public API.

use routestack_core::{NavigationEvent, NavigationState, PresentationStyle};
use rstest::*;

mod fixtures;
use fixtures::*;

// ============================================================================
// Stack Operations
// ============================================================================

#[rstest]
fn test_scenario_navigate_back_navigate(mut empty_state: NavigationState<AppRoute>) {
	// Act
	empty_state.navigate(AppRoute::Home);
	empty_state.navigate(AppRoute::Profile);
	empty_state.go_back();
	empty_state.navigate(AppRoute::Settings);

	// Assert
	assert_eq!(empty_state.path(), [AppRoute::Home, AppRoute::Settings]);
}

#[rstest]
fn test_go_back_removes_only_last(mut deep_state: NavigationState<AppRoute>) {
	let popped = deep_state.go_back();

	assert_eq!(popped, Some(AppRoute::Settings));
	assert_eq!(deep_state.path(), [AppRoute::Home, AppRoute::Profile]);
}

#[rstest]
fn test_go_back_empty_stays_empty(mut empty_state: NavigationState<AppRoute>) {
	let log = record(&mut empty_state);

	empty_state.go_back();
	empty_state.go_back();

	assert!(empty_state.is_empty());
	assert!(log.lock().unwrap().is_empty());
}

#[rstest]
fn test_pop_to_root_clears(mut deep_state: NavigationState<AppRoute>) {
	deep_state.pop_to_root();
	assert!(deep_state.path().is_empty());
}

#[rstest]
fn test_deep_link_appends_in_order(mut empty_state: NavigationState<AppRoute>) {
	// Arrange
	empty_state.navigate(AppRoute::Home);
	let log = record(&mut empty_state);

	// Act
	empty_state.handle_deep_link([AppRoute::Profile, AppRoute::Settings]);

	// Assert
	assert_eq!(
		empty_state.path(),
		[AppRoute::Home, AppRoute::Profile, AppRoute::Settings]
	);
	assert_eq!(
		*log.lock().unwrap(),
		vec![NavigationEvent::DeepLinked {
			routes: vec![AppRoute::Profile, AppRoute::Settings]
		}]
	);
}

// ============================================================================
// Modal Presentation
// ============================================================================

#[rstest]
fn test_second_present_wins(mut empty_state: NavigationState<AppRoute>) {
	// Act
	empty_state.present(AppRoute::Home, PresentationStyle::Sheet);
	empty_state.present(AppRoute::Settings, PresentationStyle::Sheet);

	// Assert
	assert_eq!(empty_state.presented_item(), Some(&AppRoute::Settings));
	assert_eq!(empty_state.presentation_style(), Some(PresentationStyle::Sheet));
}

#[cfg(feature = "full-screen-cover")]
#[rstest]
fn test_present_full_screen_cover_sets_style(mut empty_state: NavigationState<AppRoute>) {
	empty_state.present(AppRoute::Profile, PresentationStyle::FullScreenCover);

	assert_eq!(
		empty_state.presentation_style(),
		Some(PresentationStyle::FullScreenCover)
	);
}

#[rstest]
fn test_dismiss_without_modal_is_noop(mut deep_state: NavigationState<AppRoute>) {
	let log = record(&mut deep_state);

	assert!(!deep_state.dismiss());
	assert!(log.lock().unwrap().is_empty());
}

// ============================================================================
// Change Notification
// ============================================================================

#[rstest]
fn test_events_follow_program_order(mut empty_state: NavigationState<AppRoute>) {
	// Arrange
	let log = record(&mut empty_state);

	// Act
	empty_state.navigate(AppRoute::Home);
	empty_state.present(AppRoute::Profile, PresentationStyle::Sheet);
	empty_state.go_back();
	empty_state.dismiss();

	// Assert
	assert_eq!(
		*log.lock().unwrap(),
		vec![
			NavigationEvent::Pushed(AppRoute::Home),
			NavigationEvent::Presented {
				route: AppRoute::Profile,
				style: PresentationStyle::Sheet,
			},
			NavigationEvent::Popped(AppRoute::Home),
			NavigationEvent::Dismissed {
				route: AppRoute::Profile
			},
		]
	);
}

#[rstest]
fn test_independent_states_do_not_share_changes() {
	// Arrange
	let mut first: NavigationState<AppRoute> = NavigationState::new();
	let mut second: NavigationState<AppRoute> = NavigationState::new();
	let second_log = record(&mut second);

	// Act
	first.navigate(AppRoute::Home);
	first.present(AppRoute::Settings, PresentationStyle::Sheet);

	// Assert
	assert!(second.is_empty());
	assert_eq!(second.presented_item(), None);
	assert!(second_log.lock().unwrap().is_empty());
}
