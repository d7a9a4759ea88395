//! # routestack
//!
//! A navigation-state engine for application routers: a root-first stack of
//! typed routes, at most one presented modal, deep-link resolution and
//! state restoration.
//!
//! ## Crates
//!
//! - [`navigation`] (`routestack-core`): [`NavigationState`], observers and
//!   the [`StateCodec`]
//! - [`deeplink`] (`routestack-deeplink`): [`DeepLinkResolver`],
//!   [`SegmentResolver`] and [`LinkDispatcher`]
//! - this crate: the [`Router`] facade, [`RouterConfig`] and [`StateStore`]
//!
//! ## Feature Flags
//!
//! - `full-screen-cover` (default) - enables
//!   `PresentationStyle::FullScreenCover` on platforms that have it
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use routestack::{MemoryStore, PresentationStyle, Router, RouterConfig};
//!
//! let config = RouterConfig::from_toml_str(
//! 	r#"
//! 	[deep_links]
//! 	schemes = ["testapp"]
//!
//! 	[restoration]
//! 	key = "main-tab"
//! 	"#,
//! )
//! .unwrap();
//!
//! let mut router: Router<String> =
//! 	Router::from_config(&config, Arc::new(MemoryStore::new())).unwrap();
//!
//! router.navigate("home".to_string());
//! router.present("compose".to_string(), PresentationStyle::Sheet);
//! assert!(router.open_url_str("testapp://profile").unwrap());
//!
//! assert_eq!(router.path(), ["home".to_string(), "profile".to_string()]);
//! assert_eq!(router.modal().item().map(String::as_str), Some("compose"));
//! assert_eq!(&router.snapshot()[..], br#"["home","profile"]"#);
//! ```

pub mod config;
pub mod deeplink;
pub mod error;
pub mod navigation;
pub mod router;
pub mod store;

// Re-export main types for convenience
pub use config::{DeepLinkConfig, RestorationConfig, RouterConfig};
pub use error::{RouterError, RouterResult, StoreError};
pub use router::{ModalBinding, PathBinding, Router};
pub use store::{MemoryStore, RestorationKey, StateStore};

pub use routestack_core::{
	DismissCallback, NavigationEvent, NavigationState, Presentation, PresentationStyle,
	RestoreError, RestoreOutcome, Route, RouteIdentifier, StateCodec, SubscriptionId,
};
pub use routestack_deeplink::{
	DeepLinkResolver, DeeplinkError, LinkChannel, LinkDispatcher, Resolution, ResolverChain,
	SegmentResolver, parse_link,
};
