//! Router facade composing navigation state, deep links and restoration.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use bytes::Bytes;
use routestack_core::{
	NavigationEvent, NavigationState, Presentation, PresentationStyle, RestoreOutcome, Route,
	RouteIdentifier, StateCodec, SubscriptionId,
};
use routestack_deeplink::{
	DeepLinkResolver, LinkChannel, LinkDispatcher, Resolution, SegmentResolver, parse_link,
};
use url::Url;

use crate::config::{DeepLinkConfig, RouterConfig};
use crate::error::{RouterError, RouterResult};
use crate::store::{RestorationKey, StateStore};

/// Restoration wiring: where and how the stack is saved after each change.
struct Persistence<R> {
	key: RestorationKey,
	store: Arc<dyn StateStore>,
	encode: fn(&[R]) -> Bytes,
}

/// Navigation router for one navigation scope.
///
/// The router exclusively owns the scope's [`NavigationState`] and forwards
/// inbound links to its [`LinkDispatcher`]. When restoration is configured,
/// every operation that changes the stack saves the encoded stack to the
/// [`StateStore`]; store failures are logged and never interrupt navigation.
///
/// Routers are passed explicitly to the code that needs them; there is no
/// global instance.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use routestack::{MemoryStore, RestorationKey, Router, SegmentResolver};
///
/// let store = Arc::new(MemoryStore::new());
/// let key = RestorationKey::new("main-tab").unwrap();
/// let mut router: Router<String> = Router::new()
/// 	.with_deep_links(SegmentResolver::<String>::for_scheme("testapp").unwrap())
/// 	.with_restoration(key.clone(), store.clone());
///
/// router.navigate("home".to_string());
/// assert!(router.open_url_str("testapp://profile/settings").unwrap());
///
/// assert_eq!(router.path().len(), 3);
/// assert_eq!(
/// 	store.get(&key).as_deref(),
/// 	Some(&br#"["home","profile","settings"]"#[..])
/// );
/// ```
pub struct Router<R: Route> {
	state: NavigationState<R>,
	links: LinkDispatcher<R>,
	persistence: Option<Persistence<R>>,
}

impl<R: Route> fmt::Debug for Router<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("state", &self.state)
			.field("links", &self.links)
			.field(
				"restoration_key",
				&self.persistence.as_ref().map(|p| p.key.as_str()),
			)
			.finish()
	}
}

impl<R: Route> Default for Router<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Route> Router<R> {
	/// Creates a router with an empty stack, no deep links and no
	/// restoration.
	pub fn new() -> Self {
		Self::with_state(NavigationState::new())
	}

	/// Creates a router around an existing navigation state.
	pub fn with_state(state: NavigationState<R>) -> Self {
		Self {
			state,
			links: LinkDispatcher::new(),
			persistence: None,
		}
	}

	/// Sets the primary deep-link resolver.
	pub fn with_deep_links<T>(mut self, resolver: T) -> Self
	where
		T: DeepLinkResolver<R> + 'static,
	{
		self.links.set_primary(Box::new(resolver));
		self
	}

	/// Sets a dedicated universal-link resolver and enables universal links.
	pub fn with_universal_links<T>(mut self, resolver: T) -> Self
	where
		T: DeepLinkResolver<R> + 'static,
	{
		self.links.set_universal(Box::new(resolver));
		self.links.set_universal_links_enabled(true);
		self
	}

	/// Enables or disables universal links.
	///
	/// With no dedicated universal resolver, enabled web links go to the
	/// primary resolver.
	pub fn universal_links_enabled(mut self, enabled: bool) -> Self {
		self.links.set_universal_links_enabled(enabled);
		self
	}

	/// Replaces the link dispatcher wholesale.
	pub fn with_dispatcher(mut self, links: LinkDispatcher<R>) -> Self {
		self.links = links;
		self
	}

	/// Returns the navigation state.
	pub fn state(&self) -> &NavigationState<R> {
		&self.state
	}

	/// Consumes the router, returning its navigation state.
	pub fn into_state(self) -> NavigationState<R> {
		self.state
	}

	/// Returns the stack, root-first.
	pub fn path(&self) -> &[R] {
		self.state.path()
	}

	/// Returns a writable binding to the stack.
	///
	/// Edits are applied when the binding is dropped; observers are notified
	/// and the stack is persisted only if it changed.
	pub fn path_mut(&mut self) -> PathBinding<'_, R> {
		let draft = self.state.path().to_vec();
		PathBinding {
			router: self,
			draft,
		}
	}

	/// Replaces the stack. Returns `false` if it was already equal.
	pub fn set_path(&mut self, path: Vec<R>) -> bool {
		let changed = self.state.replace_path(path);
		if changed {
			self.persist_path();
		}
		changed
	}

	/// Returns the read-only modal binding.
	pub fn modal(&self) -> ModalBinding<'_, R> {
		ModalBinding {
			presentation: self.state.presented(),
		}
	}

	/// Pushes a route.
	pub fn navigate(&mut self, route: R) {
		self.state.navigate(route);
		self.persist_path();
	}

	/// Pops the top route. Does nothing on an empty stack.
	pub fn go_back(&mut self) -> Option<R> {
		let popped = self.state.go_back();
		if popped.is_some() {
			self.persist_path();
		}
		popped
	}

	/// Clears the stack.
	pub fn pop_to_root(&mut self) {
		if self.state.is_empty() {
			return;
		}
		self.state.pop_to_root();
		self.persist_path();
	}

	/// Presents a modal, replacing any presented one.
	pub fn present(&mut self, route: R, style: PresentationStyle) {
		self.state.present(route, style);
	}

	/// Presents a modal with a callback run when it is dismissed.
	pub fn present_with_dismiss<F>(&mut self, route: R, style: PresentationStyle, on_dismiss: F)
	where
		F: FnOnce() + Send + 'static,
	{
		self.state.present_with_dismiss(route, style, on_dismiss);
	}

	/// Dismisses the modal, running its dismiss callback once.
	pub fn dismiss(&mut self) -> bool {
		self.state.dismiss()
	}

	/// Appends routes in order.
	pub fn handle_deep_link<I>(&mut self, routes: I)
	where
		I: IntoIterator<Item = R>,
	{
		let before = self.state.len();
		self.state.handle_deep_link(routes);
		if self.state.len() != before {
			self.persist_path();
		}
	}

	/// Resolves an inbound URL and appends the resolved routes.
	///
	/// Returns `true` if a resolver handled the URL, even when it resolved
	/// to no routes, and `false` if the URL was ignored.
	pub fn open_url(&mut self, url: &Url, channel: LinkChannel) -> bool {
		match self.links.dispatch(url, channel) {
			Resolution::Handled(routes) => {
				self.handle_deep_link(routes);
				true
			}
			Resolution::NotHandled => false,
		}
	}

	/// Parses a raw link, infers its channel and opens it.
	///
	/// # Errors
	///
	/// Returns `RouterError::Deeplink` if `link` is not a valid URL.
	pub fn open_url_str(&mut self, link: &str) -> RouterResult<bool> {
		let url = parse_link(link)?;
		let channel = LinkChannel::infer(&url);
		Ok(self.open_url(&url, channel))
	}

	/// Registers an observer of state changes.
	pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
	where
		F: FnMut(&NavigationEvent<R>) + Send + 'static,
	{
		self.state.subscribe(observer)
	}

	/// Removes an observer.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.state.unsubscribe(id)
	}

	/// Returns the restoration key, if restoration is configured.
	pub fn restoration_key(&self) -> Option<&RestorationKey> {
		self.persistence.as_ref().map(|p| &p.key)
	}

	fn persist_path(&self) {
		let Some(persistence) = &self.persistence else {
			return;
		};
		let buffer = (persistence.encode)(self.state.path());
		if let Err(error) = persistence.store.save(&persistence.key, buffer) {
			tracing::warn!(error = %error, key = %persistence.key, "failed to persist navigation state");
		}
	}
}

impl<R: RouteIdentifier> Router<R> {
	/// Builds a router from configuration.
	///
	/// Custom schemes become the primary [`SegmentResolver`]; universal hosts
	/// become a dedicated universal resolver. `store` is used only when the
	/// configuration has a restoration section.
	///
	/// # Errors
	///
	/// Returns `RouterError::Deeplink` if a scheme, host or prefix is invalid.
	pub fn from_config(config: &RouterConfig, store: Arc<dyn StateStore>) -> RouterResult<Self> {
		let mut router = Self::new();
		if let Some(deep_links) = &config.deep_links {
			router.links = dispatcher_from_config(deep_links)?;
		}
		if let Some(restoration) = &config.restoration {
			router = router.with_restoration(restoration.key.clone(), store);
		}
		Ok(router)
	}

	/// Saves the stack to `store` under `key` after every change.
	pub fn with_restoration(mut self, key: RestorationKey, store: Arc<dyn StateStore>) -> Self {
		self.persistence = Some(Persistence {
			key,
			store,
			encode: StateCodec::encode::<R>,
		});
		self
	}

	/// Encodes the stack. The modal is never included.
	pub fn snapshot(&self) -> Bytes {
		self.state.encode()
	}

	/// Restores the stack from a buffer with the fail-empty policy.
	///
	/// A failed restore persists the empty stack, so the unreadable buffer
	/// is not loaded again.
	pub fn restore(&mut self, buffer: &[u8]) -> RestoreOutcome {
		let outcome = self.state.restore(buffer);
		if !matches!(outcome, RestoreOutcome::Unchanged) {
			self.persist_path();
		}
		outcome
	}

	/// Loads the persisted buffer and restores the stack from it.
	///
	/// Returns `Ok(None)` if nothing was persisted yet.
	///
	/// # Errors
	///
	/// Returns `RouterError::RestorationDisabled` without a restoration key,
	/// or `RouterError::Store` if the store cannot be read.
	pub fn restore_from_store(&mut self) -> RouterResult<Option<RestoreOutcome>> {
		let persistence = self.persistence.as_ref().ok_or(RouterError::RestorationDisabled)?;
		let Some(buffer) = persistence.store.load(&persistence.key)? else {
			return Ok(None);
		};
		Ok(Some(self.restore(&buffer)))
	}

	/// Saves the stack now.
	///
	/// # Errors
	///
	/// Returns `RouterError::RestorationDisabled` without a restoration key,
	/// or `RouterError::Store` if the store cannot be written.
	pub fn persist(&self) -> RouterResult<()> {
		let persistence = self.persistence.as_ref().ok_or(RouterError::RestorationDisabled)?;
		persistence.store.save(&persistence.key, self.snapshot())?;
		Ok(())
	}
}

fn dispatcher_from_config<R: RouteIdentifier>(config: &DeepLinkConfig) -> RouterResult<LinkDispatcher<R>> {
	let mut links = LinkDispatcher::new().universal_links_enabled(config.universal_links);

	if !config.schemes.is_empty() {
		let schemes: Vec<&str> = config.schemes.iter().map(String::as_str).collect();
		links = links.primary(SegmentResolver::<R>::builder().schemes(&schemes).build()?);
	}

	if !config.universal_hosts.is_empty() {
		let hosts: Vec<&str> = config.universal_hosts.iter().map(String::as_str).collect();
		let mut builder = SegmentResolver::<R>::builder().universal_hosts(&hosts);
		if let Some(prefix) = &config.universal_path_prefix {
			builder = builder.path_prefix(prefix.clone());
		}
		links = links.universal(builder.build()?);
	}

	Ok(links)
}

/// Read-only view of the presented modal.
#[derive(Debug)]
pub struct ModalBinding<'a, R> {
	presentation: Option<&'a Presentation<R>>,
}

impl<'a, R> ModalBinding<'a, R> {
	/// Returns `true` if a modal is presented.
	pub fn is_presented(&self) -> bool {
		self.presentation.is_some()
	}

	/// Returns the presented route.
	pub fn item(&self) -> Option<&'a R> {
		self.presentation.map(Presentation::route)
	}

	/// Returns the presentation style.
	pub fn style(&self) -> Option<PresentationStyle> {
		self.presentation.map(Presentation::style)
	}

	/// Returns `true` if a dismiss callback is attached.
	pub fn has_on_dismiss(&self) -> bool {
		self.presentation.is_some_and(Presentation::has_on_dismiss)
	}
}

/// Writable binding to a router's stack, created by [`Router::path_mut`].
pub struct PathBinding<'a, R: Route> {
	router: &'a mut Router<R>,
	draft: Vec<R>,
}

impl<R: Route> fmt::Debug for PathBinding<'_, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("PathBinding").field(&self.draft).finish()
	}
}

impl<R: Route> Deref for PathBinding<'_, R> {
	type Target = Vec<R>;

	fn deref(&self) -> &Self::Target {
		&self.draft
	}
}

impl<R: Route> DerefMut for PathBinding<'_, R> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.draft
	}
}

impl<R: Route> Drop for PathBinding<'_, R> {
	fn drop(&mut self) {
		let draft = std::mem::take(&mut self.draft);
		self.router.set_path(draft);
	}
}
