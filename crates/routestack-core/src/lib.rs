//! Navigation-state engine for routestack.
//!
//! This crate owns the state a navigation scope needs:
//!
//! - **Stack**: an ordered `path` of routes, root-first, most-recent-last
//! - **Modal**: at most one presented route with its presentation style and
//!   dismiss callback
//! - **Restoration**: encoding the stack as a JSON array of route identifiers
//!   and restoring it with a fail-empty policy
//! - **Change notification**: observers invoked after every observable change
//!
//! # Quick Start
//!
//! ```rust
//! use routestack_core::{NavigationState, PresentationStyle};
//!
//! let mut state = NavigationState::new();
//! state.navigate("home".to_string());
//! state.navigate("profile".to_string());
//! state.go_back();
//! state.navigate("settings".to_string());
//! assert_eq!(state.path(), ["home".to_string(), "settings".to_string()]);
//!
//! state.present("compose".to_string(), PresentationStyle::Sheet);
//! assert_eq!(state.presented_item(), Some(&"compose".to_string()));
//! ```
//!
//! # Restoration
//!
//! Encoding and restoring are only available when the route type implements
//! [`RouteIdentifier`]; a state over routes without identifiers simply has no
//! `encode`/`restore` methods.
//!
//! ```rust
//! use routestack_core::{NavigationState, RestoreOutcome};
//!
//! let mut state: NavigationState<String> = NavigationState::new();
//! state.navigate("home".to_string());
//! let buffer = state.encode();
//! assert_eq!(&buffer[..], br#"["home"]"#);
//!
//! let mut fresh: NavigationState<String> = NavigationState::new();
//! assert!(matches!(fresh.restore(&buffer), RestoreOutcome::Applied { len: 1 }));
//! ```

pub mod codec;
pub mod error;
pub mod observer;
pub mod presentation;
pub mod route;
pub mod state;

pub use codec::{RestoreOutcome, StateCodec};
pub use error::RestoreError;
pub use observer::{NavigationEvent, SubscriptionId};
pub use presentation::{DismissCallback, Presentation, PresentationStyle};
pub use route::{Route, RouteIdentifier};
pub use state::{NavigationState, PathMut};
