//! Deep link module.
//!
//! Resolver contract, the segment-based reference resolver and the
//! universal-link dispatcher.
//!
//! # Examples
//!
//! ```rust
//! use routestack::deeplink::{DeepLinkResolver, Resolution, SegmentResolver};
//! use url::Url;
//!
//! let resolver = SegmentResolver::<String>::for_scheme("testapp").unwrap();
//! let url = Url::parse("testapp://profile").unwrap();
//! assert_eq!(resolver.resolve(&url), Resolution::Handled(vec!["profile".to_string()]));
//! ```

pub use routestack_deeplink::*;
