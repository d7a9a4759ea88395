//! Modal presentation types.

use std::fmt;

/// How a modal route is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationStyle {
	/// A sheet layered over the current stack.
	#[default]
	Sheet,
	/// A cover occupying the whole screen.
	#[cfg(feature = "full-screen-cover")]
	FullScreenCover,
}

/// Callback run once when a presented modal closes.
pub struct DismissCallback {
	inner: Box<dyn FnOnce() + Send + 'static>,
}

impl DismissCallback {
	/// Wraps a closure as a dismiss callback.
	pub fn new<F>(f: F) -> Self
	where
		F: FnOnce() + Send + 'static,
	{
		Self { inner: Box::new(f) }
	}

	/// Consumes the callback and runs it.
	pub fn call(self) {
		(self.inner)()
	}
}

impl fmt::Debug for DismissCallback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DismissCallback").finish_non_exhaustive()
	}
}

/// The single active modal of a navigation scope.
///
/// The route, its style and its dismiss callback are stored together, so
/// they are always set and cleared as one unit.
#[derive(Debug)]
pub struct Presentation<R> {
	route: R,
	style: PresentationStyle,
	on_dismiss: Option<DismissCallback>,
}

impl<R> Presentation<R> {
	pub(crate) fn new(route: R, style: PresentationStyle, on_dismiss: Option<DismissCallback>) -> Self {
		Self {
			route,
			style,
			on_dismiss,
		}
	}

	/// Returns the presented route.
	pub fn route(&self) -> &R {
		&self.route
	}

	/// Returns the presentation style.
	pub fn style(&self) -> PresentationStyle {
		self.style
	}

	/// Returns `true` if a dismiss callback is attached.
	pub fn has_on_dismiss(&self) -> bool {
		self.on_dismiss.is_some()
	}

	pub(crate) fn into_parts(self) -> (R, Option<DismissCallback>) {
		(self.route, self.on_dismiss)
	}
}
