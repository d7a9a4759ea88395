//! Router configuration.
//!
//! A router accepts zero or one deep-link setup (custom schemes, optional
//! universal links) and zero or one restoration key. Configuration can be
//! built in code or loaded from TOML:
//!
//! ```toml
//! [deep_links]
//! schemes = ["testapp"]
//! universal_links = true
//! universal_hosts = ["example.com"]
//! universal_path_prefix = "/app"
//!
//! [restoration]
//! key = "main-tab"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RouterResult;
use crate::store::RestorationKey;

/// Configuration of a [`Router`](crate::Router).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
	/// Deep-link handling; `None` disables deep links.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deep_links: Option<DeepLinkConfig>,

	/// State restoration; `None` disables persistence.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub restoration: Option<RestorationConfig>,
}

/// Deep-link section of [`RouterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeepLinkConfig {
	/// Custom URL schemes handled by the primary resolver.
	pub schemes: Vec<String>,

	/// Whether web links are handled at all.
	pub universal_links: bool,

	/// Domains handled by a dedicated universal-link resolver. When empty,
	/// enabled web links fall back to the primary resolver.
	pub universal_hosts: Vec<String>,

	/// Path prefix web links must start with (e.g. `/app`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub universal_path_prefix: Option<String>,
}

/// Restoration section of [`RouterConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestorationConfig {
	/// Key the stack is persisted under.
	pub key: RestorationKey,
}

impl RouterConfig {
	/// Creates an empty configuration: no deep links, no restoration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a configuration from TOML.
	///
	/// # Errors
	///
	/// Returns `RouterError::Config` if the document is invalid, including
	/// blank restoration keys and unknown fields.
	pub fn from_toml_str(source: &str) -> RouterResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Serializes the configuration to TOML.
	///
	/// # Errors
	///
	/// Returns `RouterError::ConfigSerialization` if serialization fails.
	pub fn to_toml_string(&self) -> RouterResult<String> {
		Ok(toml::to_string(self)?)
	}

	/// Adds a custom URL scheme.
	pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
		self.deep_links_mut().schemes.push(scheme.into());
		self
	}

	/// Enables or disables universal links.
	pub fn universal_links(mut self, enabled: bool) -> Self {
		self.deep_links_mut().universal_links = enabled;
		self
	}

	/// Adds a universal-link domain.
	pub fn universal_host(mut self, host: impl Into<String>) -> Self {
		self.deep_links_mut().universal_hosts.push(host.into());
		self
	}

	/// Sets the universal-link path prefix.
	pub fn universal_path_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.deep_links_mut().universal_path_prefix = Some(prefix.into());
		self
	}

	/// Sets the restoration key.
	pub fn restoration_key(mut self, key: RestorationKey) -> Self {
		self.restoration = Some(RestorationConfig { key });
		self
	}

	fn deep_links_mut(&mut self) -> &mut DeepLinkConfig {
		self.deep_links.get_or_insert_with(DeepLinkConfig::default)
	}
}
