//! Navigation stack and modal state.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::observer::{NavigationEvent, Observers, SubscriptionId};
use crate::presentation::{DismissCallback, Presentation, PresentationStyle};
use crate::route::Route;

/// Navigation state of a single navigation scope.
///
/// Holds the stack (`path`) and at most one presented modal. Every operation
/// is total: popping an empty stack or dismissing when nothing is presented
/// are defined no-ops, not errors.
///
/// A state is exclusively owned by its scope and mutated through `&mut self`;
/// there is no internal locking.
pub struct NavigationState<R: Route> {
	path: Vec<R>,
	presentation: Option<Presentation<R>>,
	observers: Observers<R>,
}

impl<R: Route> fmt::Debug for NavigationState<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationState")
			.field("path", &self.path)
			.field("presentation", &self.presentation)
			.field("observers", &self.observers.len())
			.finish()
	}
}

impl<R: Route> Default for NavigationState<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Route> NavigationState<R> {
	/// Creates an empty navigation state.
	pub fn new() -> Self {
		Self::with_path(Vec::new())
	}

	/// Creates a navigation state starting from the given stack.
	pub fn with_path(path: Vec<R>) -> Self {
		Self {
			path,
			presentation: None,
			observers: Observers::new(),
		}
	}

	/// Returns the stack, root-first.
	pub fn path(&self) -> &[R] {
		&self.path
	}

	/// Returns the stack depth.
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// Returns `true` if the stack is empty.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns the most recently pushed route.
	pub fn top(&self) -> Option<&R> {
		self.path.last()
	}

	/// Returns the active modal, if any.
	pub fn presented(&self) -> Option<&Presentation<R>> {
		self.presentation.as_ref()
	}

	/// Returns the presented route, if any.
	pub fn presented_item(&self) -> Option<&R> {
		self.presentation.as_ref().map(Presentation::route)
	}

	/// Returns the style of the presented route, if any.
	pub fn presentation_style(&self) -> Option<PresentationStyle> {
		self.presentation.as_ref().map(Presentation::style)
	}

	/// Pushes a route onto the stack.
	pub fn navigate(&mut self, route: R) {
		tracing::debug!(route = ?route, depth = self.path.len() + 1, "navigate");
		self.path.push(route.clone());
		self.emit(NavigationEvent::Pushed(route));
	}

	/// Pops the top route. Does nothing on an empty stack.
	pub fn go_back(&mut self) -> Option<R> {
		let route = self.path.pop()?;
		tracing::debug!(route = ?route, depth = self.path.len(), "go back");
		self.emit(NavigationEvent::Popped(route.clone()));
		Some(route)
	}

	/// Clears the stack. Idempotent.
	pub fn pop_to_root(&mut self) {
		if self.path.is_empty() {
			return;
		}
		let removed = self.path.len();
		self.path.clear();
		tracing::debug!(removed, "pop to root");
		self.emit(NavigationEvent::PoppedToRoot { removed });
	}

	/// Appends routes resolved from a deep link, in order.
	///
	/// Equivalent to calling [`navigate`](Self::navigate) once per route,
	/// but observers receive a single [`NavigationEvent::DeepLinked`].
	pub fn handle_deep_link<I>(&mut self, routes: I)
	where
		I: IntoIterator<Item = R>,
	{
		let routes: Vec<R> = routes.into_iter().collect();
		if routes.is_empty() {
			return;
		}
		tracing::debug!(count = routes.len(), "handle deep link");
		self.path.extend(routes.iter().cloned());
		self.emit(NavigationEvent::DeepLinked { routes });
	}

	/// Replaces the whole stack.
	///
	/// Returns `false` and notifies nobody when `path` equals the current
	/// stack.
	pub fn replace_path(&mut self, path: Vec<R>) -> bool {
		if self.path == path {
			return false;
		}
		self.path = path;
		let len = self.path.len();
		self.emit(NavigationEvent::PathReplaced { len });
		true
	}

	/// Returns a mutable binding to the stack.
	///
	/// Observers receive [`NavigationEvent::PathReplaced`] when the binding
	/// is dropped, only if the stack actually changed.
	pub fn path_mut(&mut self) -> PathMut<'_, R> {
		let before = self.path.clone();
		PathMut {
			state: self,
			before,
		}
	}

	/// Presents a modal, replacing any presented one.
	pub fn present(&mut self, route: R, style: PresentationStyle) {
		self.set_presentation(route, style, None);
	}

	/// Presents a modal with a callback to run when it is dismissed.
	///
	/// The callback of a presentation replaced by a later `present` is
	/// dropped without running.
	pub fn present_with_dismiss<F>(&mut self, route: R, style: PresentationStyle, on_dismiss: F)
	where
		F: FnOnce() + Send + 'static,
	{
		self.set_presentation(route, style, Some(DismissCallback::new(on_dismiss)));
	}

	fn set_presentation(&mut self, route: R, style: PresentationStyle, on_dismiss: Option<DismissCallback>) {
		tracing::debug!(route = ?route, ?style, "present");
		if let Some(replaced) = self.presentation.take() {
			tracing::debug!(route = ?replaced.route(), "presentation replaced");
		}
		self.presentation = Some(Presentation::new(route.clone(), style, on_dismiss));
		self.emit(NavigationEvent::Presented { route, style });
	}

	/// Dismisses the presented modal and runs its dismiss callback once.
	///
	/// Returns `false` if nothing was presented.
	pub fn dismiss(&mut self) -> bool {
		let Some(presentation) = self.presentation.take() else {
			return false;
		};
		let (route, on_dismiss) = presentation.into_parts();
		tracing::debug!(route = ?route, "dismiss");
		if let Some(callback) = on_dismiss {
			callback.call();
		}
		self.emit(NavigationEvent::Dismissed { route });
		true
	}

	/// Registers an observer called after each change.
	pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
	where
		F: FnMut(&NavigationEvent<R>) + Send + 'static,
	{
		self.observers.subscribe(Box::new(observer))
	}

	/// Removes an observer. Returns `false` if the id is unknown.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.observers.unsubscribe(id)
	}

	pub(crate) fn take_path(&mut self) -> Vec<R> {
		std::mem::take(&mut self.path)
	}

	pub(crate) fn set_path(&mut self, path: Vec<R>) {
		self.path = path;
	}

	pub(crate) fn emit(&mut self, event: NavigationEvent<R>) {
		self.observers.notify(&event);
	}
}

/// Mutable binding to the stack of a [`NavigationState`].
///
/// Created by [`NavigationState::path_mut`].
pub struct PathMut<'a, R: Route> {
	state: &'a mut NavigationState<R>,
	before: Vec<R>,
}

impl<R: Route> fmt::Debug for PathMut<'_, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("PathMut").field(&self.state.path).finish()
	}
}

impl<R: Route> Deref for PathMut<'_, R> {
	type Target = Vec<R>;

	fn deref(&self) -> &Self::Target {
		&self.state.path
	}
}

impl<R: Route> DerefMut for PathMut<'_, R> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.state.path
	}
}

impl<R: Route> Drop for PathMut<'_, R> {
	fn drop(&mut self) {
		if self.state.path != self.before {
			let len = self.state.path.len();
			self.state.emit(NavigationEvent::PathReplaced { len });
		}
	}
}
