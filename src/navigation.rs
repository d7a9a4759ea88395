//! Navigation state module.
//!
//! Stack and modal state, observers and the restoration codec.
//!
//! # Examples
//!
//! ```rust
//! use routestack::navigation::{NavigationState, PresentationStyle};
//!
//! let mut state = NavigationState::new();
//! state.navigate("home".to_string());
//! state.present("compose".to_string(), PresentationStyle::Sheet);
//! assert_eq!(state.presented_item().map(String::as_str), Some("compose"));
//! ```

pub use routestack_core::*;
