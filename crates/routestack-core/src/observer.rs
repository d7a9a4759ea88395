//! Change notification for navigation state.
//!
//! Observers are plain closures registered on a
//! [`NavigationState`](crate::NavigationState). They run synchronously, in
//! subscription order, after each operation that changed the state. Defined
//! no-ops never notify.

use std::fmt;

use crate::presentation::PresentationStyle;

/// Observer function type.
pub(crate) type ObserverFn<R> = Box<dyn FnMut(&NavigationEvent<R>) + Send + 'static>;

/// A change applied to a navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<R> {
	/// A route was pushed onto the stack.
	Pushed(R),
	/// The top route was popped.
	Popped(R),
	/// The stack was cleared.
	PoppedToRoot {
		/// Number of routes removed.
		removed: usize,
	},
	/// The stack was replaced through a direct binding.
	PathReplaced {
		/// Stack depth after the replacement.
		len: usize,
	},
	/// Routes resolved from a deep link were appended.
	DeepLinked {
		/// The appended routes, in order.
		routes: Vec<R>,
	},
	/// The stack was replaced by a restored one.
	Restored {
		/// Stack depth after restoration.
		len: usize,
	},
	/// Restoration failed and a non-empty stack was reset.
	RestoreReset {
		/// Number of routes discarded.
		discarded: usize,
	},
	/// A modal was presented, replacing any previous one.
	Presented {
		/// The presented route.
		route: R,
		/// Its presentation style.
		style: PresentationStyle,
	},
	/// The modal was dismissed.
	Dismissed {
		/// The route that was presented.
		route: R,
	},
}

impl<R> NavigationEvent<R> {
	/// Returns `true` if the event changed the stack.
	pub fn is_path_change(&self) -> bool {
		!matches!(self, Self::Presented { .. } | Self::Dismissed { .. })
	}
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub(crate) struct Observers<R> {
	next_id: u64,
	entries: Vec<(SubscriptionId, ObserverFn<R>)>,
}

impl<R> Observers<R> {
	pub(crate) fn new() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}

	pub(crate) fn subscribe(&mut self, observer: ObserverFn<R>) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.entries.push((id, observer));
		id
	}

	pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.entries.len();
		self.entries.retain(|(entry_id, _)| *entry_id != id);
		self.entries.len() < before
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	pub(crate) fn notify(&mut self, event: &NavigationEvent<R>) {
		for (_, observer) in &mut self.entries {
			observer(event);
		}
	}
}

impl<R> fmt::Debug for Observers<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observers")
			.field("count", &self.entries.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::{Arc, Mutex};

	#[rstest]
	fn test_notify_in_subscription_order() {
		// Arrange
		let seen = Arc::new(Mutex::new(Vec::new()));
		let mut observers: Observers<&'static str> = Observers::new();
		for tag in ["first", "second"] {
			let seen = Arc::clone(&seen);
			observers.subscribe(Box::new(move |_| seen.lock().unwrap().push(tag)));
		}

		// Act
		observers.notify(&NavigationEvent::Pushed("home"));

		// Assert
		assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
	}

	#[rstest]
	fn test_unsubscribe_unknown_id_returns_false() {
		let mut observers: Observers<&'static str> = Observers::new();
		let id = observers.subscribe(Box::new(|_| {}));

		assert!(observers.unsubscribe(id));
		assert!(!observers.unsubscribe(id));
		assert_eq!(observers.len(), 0);
	}

	#[rstest]
	#[case(NavigationEvent::Pushed("a"), true)]
	#[case(NavigationEvent::PoppedToRoot { removed: 2 }, true)]
	#[case(NavigationEvent::Dismissed { route: "a" }, false)]
	fn test_is_path_change(#[case] event: NavigationEvent<&'static str>, #[case] expected: bool) {
		assert_eq!(event.is_path_change(), expected);
	}
}
