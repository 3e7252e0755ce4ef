use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;

use super::controller::init_shared;
use super::types::{ColorMode, ThemeSnapshot};
use super::web::{SharedWebThemeController, WebThemeController};

/// Reactive handle to the page's theme controller.
#[derive(Clone, Copy)]
pub struct ThemeContext {
	controller: StoredValue<SharedWebThemeController, LocalStorage>,
	snapshot: RwSignal<ThemeSnapshot>,
}

impl ThemeContext {
	/// Current state; tracked when read inside a reactive scope.
	pub fn snapshot(&self) -> ThemeSnapshot {
		self.snapshot.get()
	}

	/// Theme picked from a form value; unknown names are logged and ignored.
	pub fn set_theme_by_name(&self, name: &str) {
		self.update(|c| {
			if c.set_theme_by_name(name).is_err() {
				warn!("theme: unknown theme `{name}`");
			}
		});
	}

	/// Pick light, dark or system.
	pub fn set_color_mode(&self, mode: ColorMode) {
		self.update(|c| c.set_color_mode(mode));
	}

	/// Flip the resolved mode.
	pub fn toggle_color_mode(&self) {
		self.update(WebThemeController::toggle_color_mode);
	}

	fn update(&self, f: impl FnOnce(&mut WebThemeController)) {
		let next = self.controller.with_value(|controller| {
			let mut controller = controller.borrow_mut();
			f(&mut *controller);
			controller.snapshot()
		});
		self.snapshot.set(next);
	}
}

/// Load and apply the stored theme, start following the system colour scheme and
/// make the controller available to descendants through [`use_theme`].
pub fn provide_theme_context() -> ThemeContext {
	let controller: SharedWebThemeController =
		Rc::new(RefCell::new(WebThemeController::from_window()));
	let snapshot = RwSignal::new(ThemeSnapshot::default());

	let watch = init_shared(&controller, move |next| snapshot.set(next));
	snapshot.set(controller.borrow().snapshot());
	// Dropped with the owner, which unregisters the listener.
	let _ = StoredValue::new_local(watch);

	let context = ThemeContext {
		controller: StoredValue::new_local(controller),
		snapshot,
	};
	provide_context(context);
	context
}

/// The handle installed by [`provide_theme_context`]. Panics outside the app.
pub fn use_theme() -> ThemeContext {
	expect_context::<ThemeContext>()
}
