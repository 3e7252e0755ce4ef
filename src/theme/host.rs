//! Capabilities the theme controller needs from its host. The browser versions
//! live in [`super::web`]; tests substitute in-memory fakes.

use crate::error::HostError;

/// Persisted string preferences.
pub trait KeyValueStore {
	/// Stored value, or `None` when missing or unreadable.
	fn get(&self, key: &str) -> Option<String>;
	/// Persist `value` under `key`.
	fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The host's light/dark preference.
pub trait PreferenceSource {
	/// `Some(true)` when the host prefers dark, `None` when it cannot tell.
	fn prefers_dark(&self) -> Option<bool>;

	/// Call `on_change` whenever the preference flips, until the returned handle
	/// is dropped.
	fn watch(&self, on_change: Box<dyn FnMut()>) -> PreferenceWatch;
}

/// Document-level styling hooks.
pub trait StyleSink {
	/// Set an attribute on the document root.
	fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError>;
	/// Remove an attribute from the document root.
	fn remove_attribute(&mut self, name: &str) -> Result<(), HostError>;
	/// Add (`enabled`) or remove a class on the document root.
	fn set_class(&mut self, name: &str, enabled: bool) -> Result<(), HostError>;
}

/// Registration handle for a preference listener. Dropping it unregisters.
#[must_use = "dropping the handle unregisters the listener"]
pub struct PreferenceWatch {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl PreferenceWatch {
	/// Handle that runs `cancel` once, on [`Self::cancel`] or drop.
	pub fn new(cancel: impl FnOnce() + 'static) -> Self {
		Self {
			cancel: Some(Box::new(cancel)),
		}
	}

	/// A handle with nothing to unregister, for hosts without change events.
	pub fn inert() -> Self {
		Self { cancel: None }
	}

	/// Unregister now.
	pub fn cancel(mut self) {
		self.run_cancel();
	}

	fn run_cancel(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl Drop for PreferenceWatch {
	fn drop(&mut self) {
		self.run_cancel();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;

	#[test]
	fn test_watch_cancels_once() {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let watch = PreferenceWatch::new(move || counter.set(counter.get() + 1));
		watch.cancel();
		assert_eq!(calls.get(), 1);

		let counter = calls.clone();
		drop(PreferenceWatch::new(move || counter.set(counter.get() + 1)));
		assert_eq!(calls.get(), 2);

		drop(PreferenceWatch::inert());
	}
}
