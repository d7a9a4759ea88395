//! Configuration tests
//!
//! Builds routers from `RouterConfig`, both in code and from TOML.

use std::sync::Arc;

use routestack::{DeeplinkError, MemoryStore, RestorationKey, Router, RouterConfig, RouterError};
use rstest::*;

mod fixtures;
use fixtures::*;

const FULL_CONFIG: &str = r#"
[deep_links]
schemes = ["testapp"]
universal_links = true
universal_hosts = ["example.com", "www.example.com"]
universal_path_prefix = "/app"

[restoration]
key = "main-tab"
"#;

#[rstest]
fn test_router_from_toml(store: Arc<MemoryStore>) {
	// Arrange
	let config = RouterConfig::from_toml_str(FULL_CONFIG).unwrap();

	// Act
	let mut router: Router<AppRoute> = Router::from_config(&config, store.clone()).unwrap();
	router.open_url_str("testapp://home").unwrap();
	router.open_url_str("https://www.example.com/app/profile").unwrap();

	// Assert
	assert_eq!(router.path(), [AppRoute::Home, AppRoute::Profile]);
	assert_eq!(router.restoration_key().map(RestorationKey::as_str), Some("main-tab"));
	let key = RestorationKey::new("main-tab").unwrap();
	assert_eq!(
		store.get(&key).as_deref(),
		Some(&br#"["home","profile"]"#[..])
	);
}

#[rstest]
#[case("https://example.com/settings")]
#[case("https://other.example/app/settings")]
fn test_web_links_outside_config_are_ignored(store: Arc<MemoryStore>, #[case] link: &str) {
	// Arrange
	let config = RouterConfig::from_toml_str(FULL_CONFIG).unwrap();
	let mut router: Router<AppRoute> = Router::from_config(&config, store).unwrap();

	// Act
	let handled = router.open_url_str(link).unwrap();

	// Assert
	assert!(!handled);
	assert!(router.path().is_empty());
}

#[rstest]
fn test_universal_links_disabled_by_default(store: Arc<MemoryStore>) {
	// Arrange
	let config = RouterConfig::new().scheme("testapp").universal_host("example.com");
	let mut router: Router<AppRoute> = Router::from_config(&config, store).unwrap();

	// Act
	let handled = router.open_url_str("https://example.com/settings").unwrap();

	// Assert
	assert!(!handled);
}

#[rstest]
fn test_empty_config_has_no_links_or_restoration(store: Arc<MemoryStore>) {
	// Arrange
	let mut router: Router<AppRoute> = Router::from_config(&RouterConfig::default(), store.clone()).unwrap();

	// Act
	let handled = router.open_url_str("testapp://home").unwrap();
	router.navigate(AppRoute::Home);

	// Assert
	assert!(!handled);
	assert!(router.restoration_key().is_none());
	assert!(store.is_empty());
}

#[rstest]
#[case(RouterConfig::new().scheme("https"))]
#[case(RouterConfig::new().scheme("1bad"))]
#[case(RouterConfig::new().universal_host("example.com").universal_path_prefix("app"))]
fn test_invalid_deep_link_config(store: Arc<MemoryStore>, #[case] config: RouterConfig) {
	let result: Result<Router<AppRoute>, _> = Router::from_config(&config, store);

	assert!(matches!(result, Err(RouterError::Deeplink(_))));
}

#[rstest]
fn test_prefix_error_kind(store: Arc<MemoryStore>) {
	// Arrange
	let config = RouterConfig::new()
		.universal_host("example.com")
		.universal_path_prefix("app");

	// Act
	let result: Result<Router<AppRoute>, _> = Router::from_config(&config, store);

	// Assert
	assert!(matches!(
		result,
		Err(RouterError::Deeplink(DeeplinkError::InvalidPathPrefix(_)))
	));
}
