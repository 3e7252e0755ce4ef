//! Browser implementations of the theme host capabilities. Each one degrades to a
//! no-op when its browser object is missing (e.g. storage disabled).

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MediaQueryList, Storage};

use super::controller::ThemeController;
use super::host::{KeyValueStore, PreferenceSource, PreferenceWatch, StyleSink};
use crate::error::HostError;

/// Media query behind [`MediaQueryPreference`].
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Controller wired to the real document.
pub type WebThemeController = ThemeController<LocalStorage, MediaQueryPreference, DocumentStyle>;

impl WebThemeController {
	/// Controller over the current page's storage, media query and root element.
	pub fn from_window() -> Self {
		ThemeController::new(
			LocalStorage::from_window(),
			MediaQueryPreference::from_window(),
			DocumentStyle::from_window(),
		)
	}
}

fn window() -> Result<web_sys::Window, HostError> {
	web_sys::window().ok_or(HostError::NoWindow)
}

/// `window.localStorage`.
pub struct LocalStorage {
	storage: Option<Storage>,
}

impl LocalStorage {
	/// Falls back to a store that reads nothing and fails writes.
	pub fn from_window() -> Self {
		let storage = window().and_then(|w| {
			w.local_storage()
				.map_err(|e| HostError::js("localStorage", e))?
				.ok_or(HostError::Unavailable("localStorage"))
		});
		match storage {
			Ok(storage) => Self {
				storage: Some(storage),
			},
			Err(e) => {
				warn!("theme preferences will not persist: {e}");
				Self { storage: None }
			}
		}
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
		let storage = self
			.storage
			.as_ref()
			.ok_or(HostError::Unavailable("localStorage"))?;
		storage
			.set_item(key, value)
			.map_err(|e| HostError::js("localStorage.setItem", e))
	}
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQueryPreference {
	query: Option<MediaQueryList>,
}

impl MediaQueryPreference {
	/// Falls back to "cannot tell" without change events.
	pub fn from_window() -> Self {
		let query = window().and_then(|w| {
			w.match_media(DARK_SCHEME_QUERY)
				.map_err(|e| HostError::js("matchMedia", e))?
				.ok_or(HostError::Unavailable("matchMedia"))
		});
		match query {
			Ok(query) => Self { query: Some(query) },
			Err(e) => {
				warn!("system color scheme unavailable: {e}");
				Self { query: None }
			}
		}
	}
}

impl PreferenceSource for MediaQueryPreference {
	fn prefers_dark(&self) -> Option<bool> {
		self.query.as_ref().map(MediaQueryList::matches)
	}

	fn watch(&self, on_change: Box<dyn FnMut()>) -> PreferenceWatch {
		let Some(query) = self.query.clone() else {
			return PreferenceWatch::inert();
		};
		let callback = Closure::<dyn FnMut()>::wrap(on_change);
		if let Err(e) =
			query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
		{
			warn!("{}", HostError::js("matchMedia addEventListener", e));
			return PreferenceWatch::inert();
		}
		PreferenceWatch::new(move || {
			let _ = query
				.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
			drop(callback);
		})
	}
}

/// `document.documentElement`.
pub struct DocumentStyle {
	root: Option<Element>,
}

impl DocumentStyle {
	/// Falls back to a sink whose every call fails.
	pub fn from_window() -> Self {
		let root = window().and_then(|w| {
			w.document()
				.ok_or(HostError::Unavailable("document"))?
				.document_element()
				.ok_or(HostError::Unavailable("document element"))
		});
		match root {
			Ok(root) => Self { root: Some(root) },
			Err(e) => {
				warn!("theme cannot style the page: {e}");
				Self { root: None }
			}
		}
	}

	fn root(&self) -> Result<&Element, HostError> {
		self.root
			.as_ref()
			.ok_or(HostError::Unavailable("document element"))
	}
}

impl StyleSink for DocumentStyle {
	fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
		self.root()?
			.set_attribute(name, value)
			.map_err(|e| HostError::js("setAttribute", e))
	}

	fn remove_attribute(&mut self, name: &str) -> Result<(), HostError> {
		self.root()?
			.remove_attribute(name)
			.map_err(|e| HostError::js("removeAttribute", e))
	}

	fn set_class(&mut self, name: &str, enabled: bool) -> Result<(), HostError> {
		self.root()?
			.class_list()
			.toggle_with_force(name, enabled)
			.map(|_| ())
			.map_err(|e| HostError::js("classList.toggle", e))
	}
}

/// Shared handle used by the Leptos context and the preference listener.
pub type SharedWebThemeController = Rc<RefCell<WebThemeController>>;
