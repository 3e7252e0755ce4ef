use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};

use super::host::{KeyValueStore, PreferenceSource, PreferenceWatch, StyleSink};
use super::types::{ColorMode, ResolvedMode, ThemeName, ThemeSnapshot};
use crate::error::HostError;

/// Storage key for the theme name.
pub const THEME_STORAGE_KEY: &str = "mini-internet-theme";
/// Storage key for the colour mode setting.
pub const MODE_STORAGE_KEY: &str = "mini-internet-color-mode";
/// Root attribute carrying the theme; absent for [`ThemeName::Default`].
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Root class present while the resolved mode is dark.
pub const DARK_CLASS: &str = "dark";

/// Theme and colour-mode state plus the host capabilities it is applied through.
pub struct ThemeController<K, P, S> {
	store: K,
	preference: P,
	style: S,
	theme: ThemeName,
	color_mode: ColorMode,
	resolved: ResolvedMode,
}

fn log_host_failure(action: &str, result: Result<(), HostError>) {
	if let Err(e) = result {
		warn!("theme: {action}: {e}");
	}
}

impl<K: KeyValueStore, P: PreferenceSource, S: StyleSink> ThemeController<K, P, S> {
	/// Start from the defaults. Nothing is read or applied until [`Self::init_theme`].
	pub fn new(store: K, preference: P, style: S) -> Self {
		Self {
			store,
			preference,
			style,
			theme: ThemeName::default(),
			color_mode: ColorMode::default(),
			resolved: ResolvedMode::default(),
		}
	}

	/// Active theme.
	pub fn theme(&self) -> ThemeName {
		self.theme
	}

	/// The mode setting, possibly `System`.
	pub fn color_mode(&self) -> ColorMode {
		self.color_mode
	}

	/// Light or dark as currently applied.
	pub fn resolved_mode(&self) -> ResolvedMode {
		self.resolved
	}

	/// All three values at once.
	pub fn snapshot(&self) -> ThemeSnapshot {
		ThemeSnapshot {
			theme: self.theme,
			color_mode: self.color_mode,
			resolved: self.resolved,
		}
	}

	/// Apply and persist `theme`.
	pub fn set_theme(&mut self, theme: ThemeName) {
		self.theme = theme;
		self.apply_theme();
		log_host_failure(
			"persist theme",
			self.store.set(THEME_STORAGE_KEY, theme.into()),
		);
	}

	/// Like [`Self::set_theme`] for untrusted input; unknown names change nothing.
	pub fn set_theme_by_name(&mut self, name: &str) -> Result<(), strum::ParseError> {
		let theme = ThemeName::from_str(name)?;
		self.set_theme(theme);
		Ok(())
	}

	/// Apply and persist `mode`.
	pub fn set_color_mode(&mut self, mode: ColorMode) {
		self.color_mode = mode;
		self.apply_color_mode();
		log_host_failure(
			"persist color mode",
			self.store.set(MODE_STORAGE_KEY, mode.into()),
		);
	}

	/// Switch to the opposite of the current resolved mode. This pins the mode, so
	/// two toggles from `System` restore the look but not the `System` setting.
	pub fn toggle_color_mode(&mut self) {
		self.set_color_mode(self.resolved.opposite().into());
	}

	/// Load persisted choices (ignoring unknown values) and apply both axes.
	pub fn init_theme(&mut self) {
		if let Some(theme) = self.load::<ThemeName>(THEME_STORAGE_KEY) {
			self.theme = theme;
		}
		self.apply_theme();

		if let Some(mode) = self.load::<ColorMode>(MODE_STORAGE_KEY) {
			self.color_mode = mode;
		}
		self.apply_color_mode();
		info!(
			"theme: {} / {} (resolved {})",
			self.theme, self.color_mode, self.resolved
		);
	}

	/// Re-resolve after the host preference changed. No-op unless following it.
	pub fn refresh_system_mode(&mut self) {
		if self.color_mode == ColorMode::System {
			self.apply_color_mode();
		}
	}

	/// Register `on_change` with the host preference source.
	pub fn watch_system_preference(&self, on_change: impl FnMut() + 'static) -> PreferenceWatch {
		self.preference.watch(Box::new(on_change))
	}

	fn load<T: FromStr>(&self, key: &str) -> Option<T> {
		let raw = self.store.get(key)?;
		let parsed = T::from_str(&raw).ok();
		if parsed.is_none() {
			debug!("theme: ignoring stored {key} = {raw:?}");
		}
		parsed
	}

	fn apply_theme(&mut self) {
		let result = match self.theme {
			ThemeName::Default => self.style.remove_attribute(THEME_ATTRIBUTE),
			theme => self.style.set_attribute(THEME_ATTRIBUTE, theme.into()),
		};
		log_host_failure("apply theme", result);
	}

	fn apply_color_mode(&mut self) {
		let dark = match self.color_mode {
			ColorMode::System => self.preference.prefers_dark().unwrap_or(false),
			mode => mode == ColorMode::Dark,
		};
		self.resolved = if dark {
			ResolvedMode::Dark
		} else {
			ResolvedMode::Light
		};
		log_host_failure("apply color mode", self.style.set_class(DARK_CLASS, dark));
	}
}

/// Run [`ThemeController::init_theme`] and keep following the host preference
/// while the returned handle lives. `on_change` receives the state after every
/// live update.
pub fn init_shared<K, P, S>(
	controller: &Rc<RefCell<ThemeController<K, P, S>>>,
	mut on_change: impl FnMut(ThemeSnapshot) + 'static,
) -> PreferenceWatch
where
	K: KeyValueStore + 'static,
	P: PreferenceSource + 'static,
	S: StyleSink + 'static,
{
	controller.borrow_mut().init_theme();

	let weak = Rc::downgrade(controller);
	controller.borrow().watch_system_preference(move || {
		let Some(controller) = weak.upgrade() else {
			return;
		};
		let snapshot = {
			let mut controller = controller.borrow_mut();
			controller.refresh_system_mode();
			controller.snapshot()
		};
		on_change(snapshot);
	})
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::collections::HashMap;

	use super::*;

	/// Shared map so a second controller sees what the first persisted.
	#[derive(Clone, Default)]
	struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

	impl KeyValueStore for MemoryStore {
		fn get(&self, key: &str) -> Option<String> {
			self.0.borrow().get(key).cloned()
		}

		fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
			self.0.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}
	}

	type Listeners = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

	#[derive(Clone, Default)]
	struct FakePreference {
		dark: Rc<Cell<Option<bool>>>,
		listeners: Listeners,
	}

	impl FakePreference {
		fn flip(&self, dark: bool) {
			self.dark.set(Some(dark));
			let count = self.listeners.borrow().len();
			for i in 0..count {
				let taken = self.listeners.borrow_mut()[i].take();
				if let Some(mut listener) = taken {
					listener();
					self.listeners.borrow_mut()[i] = Some(listener);
				}
			}
		}

		fn active(&self) -> usize {
			self.listeners.borrow().iter().filter(|l| l.is_some()).count()
		}
	}

	impl PreferenceSource for FakePreference {
		fn prefers_dark(&self) -> Option<bool> {
			self.dark.get()
		}

		fn watch(&self, on_change: Box<dyn FnMut()>) -> PreferenceWatch {
			let mut listeners = self.listeners.borrow_mut();
			let slot = listeners.len();
			listeners.push(Some(on_change));
			let listeners = self.listeners.clone();
			PreferenceWatch::new(move || {
				listeners.borrow_mut()[slot] = None;
			})
		}
	}

	#[derive(Clone, Default)]
	struct FakeStyle {
		attributes: Rc<RefCell<HashMap<String, String>>>,
		classes: Rc<RefCell<Vec<String>>>,
	}

	impl FakeStyle {
		fn attribute(&self, name: &str) -> Option<String> {
			self.attributes.borrow().get(name).cloned()
		}

		fn has_class(&self, name: &str) -> bool {
			self.classes.borrow().iter().any(|c| c == name)
		}
	}

	impl StyleSink for FakeStyle {
		fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
			self.attributes.borrow_mut().insert(name.into(), value.into());
			Ok(())
		}

		fn remove_attribute(&mut self, name: &str) -> Result<(), HostError> {
			self.attributes.borrow_mut().remove(name);
			Ok(())
		}

		fn set_class(&mut self, name: &str, enabled: bool) -> Result<(), HostError> {
			let mut classes = self.classes.borrow_mut();
			classes.retain(|c| c != name);
			if enabled {
				classes.push(name.into());
			}
			Ok(())
		}
	}

	struct FailingStore;

	impl KeyValueStore for FailingStore {
		fn get(&self, _key: &str) -> Option<String> {
			None
		}

		fn set(&mut self, _key: &str, _value: &str) -> Result<(), HostError> {
			Err(HostError::Unavailable("localStorage"))
		}
	}

	type Controller = ThemeController<MemoryStore, FakePreference, FakeStyle>;

	fn controller(store: &MemoryStore, pref: &FakePreference, style: &FakeStyle) -> Controller {
		ThemeController::new(store.clone(), pref.clone(), style.clone())
	}

	#[test]
	fn test_defaults_before_init() {
		let (store, pref, style) = Default::default();
		let c = controller(&store, &pref, &style);
		assert_eq!(c.theme(), ThemeName::Neuromancer);
		assert_eq!(c.color_mode(), ColorMode::System);
		assert_eq!(c.resolved_mode(), ResolvedMode::Light);
	}

	#[test]
	fn test_theme_survives_reload() {
		let (store, pref, style) = Default::default();
		let mut first = controller(&store, &pref, &style);
		first.init_theme();
		first.set_theme(ThemeName::NeonMatrix);
		assert_eq!(style.attribute(THEME_ATTRIBUTE).as_deref(), Some("neon-matrix"));

		let fresh_style = FakeStyle::default();
		let mut reloaded = controller(&store, &pref, &fresh_style);
		reloaded.init_theme();
		assert_eq!(reloaded.theme(), ThemeName::NeonMatrix);
		assert_eq!(fresh_style.attribute(THEME_ATTRIBUTE).as_deref(), Some("neon-matrix"));
	}

	#[test]
	fn test_unknown_stored_values_fall_back() {
		let store = MemoryStore::default();
		store.0.borrow_mut().insert(THEME_STORAGE_KEY.into(), "bogus".into());
		store.0.borrow_mut().insert(MODE_STORAGE_KEY.into(), "sepia".into());

		let style = FakeStyle::default();
		let mut c = controller(&store, &FakePreference::default(), &style);
		c.init_theme();
		assert_eq!(c.theme(), ThemeName::Neuromancer);
		assert_eq!(c.color_mode(), ColorMode::System);
		assert_eq!(style.attribute(THEME_ATTRIBUTE).as_deref(), Some("neuromancer"));
	}

	#[test]
	fn test_default_theme_removes_attribute() {
		let (store, pref, style) = Default::default();
		let mut c = controller(&store, &pref, &style);
		c.init_theme();
		assert!(style.attribute(THEME_ATTRIBUTE).is_some());
		c.set_theme(ThemeName::Default);
		assert_eq!(style.attribute(THEME_ATTRIBUTE), None);
		assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("default"));
	}

	#[test]
	fn test_set_theme_by_name_validates() {
		let (store, pref, style) = Default::default();
		let mut c = controller(&store, &pref, &style);
		assert!(c.set_theme_by_name("bogus").is_err());
		assert_eq!(c.theme(), ThemeName::Neuromancer);
		assert_eq!(store.get(THEME_STORAGE_KEY), None);

		c.set_theme_by_name("cyber-magenta").unwrap();
		assert_eq!(c.theme(), ThemeName::CyberMagenta);
	}

	#[test]
	fn test_system_mode_follows_preference() {
		let (store, pref, style): (MemoryStore, FakePreference, FakeStyle) = Default::default();
		pref.dark.set(Some(true));
		let mut c = controller(&store, &pref, &style);
		c.init_theme();
		assert_eq!(c.resolved_mode(), ResolvedMode::Dark);
		assert!(style.has_class(DARK_CLASS));

		c.set_color_mode(ColorMode::Light);
		assert_eq!(c.resolved_mode(), ResolvedMode::Light);
		assert!(!style.has_class(DARK_CLASS));
		// The setting is persisted, not the resolved value.
		c.set_color_mode(ColorMode::System);
		assert_eq!(store.get(MODE_STORAGE_KEY).as_deref(), Some("system"));
	}

	#[test]
	fn test_unanswerable_preference_resolves_light() {
		let (store, pref, style) = Default::default();
		let mut c = controller(&store, &pref, &style);
		c.init_theme();
		assert_eq!(c.resolved_mode(), ResolvedMode::Light);
	}

	#[test]
	fn test_toggle_twice_restores_resolved_mode() {
		for start in [ColorMode::Light, ColorMode::Dark, ColorMode::System] {
			let (store, pref, style): (MemoryStore, FakePreference, FakeStyle) = Default::default();
			pref.dark.set(Some(true));
			let mut c = controller(&store, &pref, &style);
			c.set_color_mode(start);
			let before = c.resolved_mode();

			c.toggle_color_mode();
			assert_eq!(c.resolved_mode(), before.opposite());
			c.toggle_color_mode();
			assert_eq!(c.resolved_mode(), before);
			// Toggling pins an explicit mode.
			assert_ne!(c.color_mode(), ColorMode::System);
		}
	}

	#[test]
	fn test_system_mode_restored_after_toggle() {
		let (store, pref, style): (MemoryStore, FakePreference, FakeStyle) = Default::default();
		pref.dark.set(Some(false));
		let shared = Rc::new(RefCell::new(controller(&store, &pref, &style)));
		let _watch = init_shared(&shared, |_| {});

		shared.borrow_mut().toggle_color_mode();
		assert_eq!(shared.borrow().color_mode(), ColorMode::Dark);
		pref.flip(false);
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Dark);

		shared.borrow_mut().set_color_mode(ColorMode::System);
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Light);
		assert_eq!(store.get(MODE_STORAGE_KEY).as_deref(), Some("system"));
		pref.flip(true);
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Dark);
		assert!(style.has_class(DARK_CLASS));
	}

	#[test]
	fn test_shared_init_tracks_live_changes() {
		let (store, pref, style): (MemoryStore, FakePreference, FakeStyle) = Default::default();
		pref.dark.set(Some(false));
		let shared = Rc::new(RefCell::new(controller(&store, &pref, &style)));
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();

		let watch = init_shared(&shared, move |snapshot| sink.borrow_mut().push(snapshot.resolved));
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Light);
		assert_eq!(pref.active(), 1);

		pref.flip(true);
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Dark);
		assert!(style.has_class(DARK_CLASS));

		// An explicit mode stops live updates from changing anything.
		shared.borrow_mut().set_color_mode(ColorMode::Light);
		pref.flip(true);
		assert_eq!(shared.borrow().resolved_mode(), ResolvedMode::Light);

		drop(watch);
		assert_eq!(pref.active(), 0);
		shared.borrow_mut().set_color_mode(ColorMode::System);
		pref.flip(false);
		assert_eq!(*seen.borrow(), vec![ResolvedMode::Dark, ResolvedMode::Light]);
	}

	#[test]
	fn test_storage_failure_still_applies() {
		let style = FakeStyle::default();
		let mut c = ThemeController::new(FailingStore, FakePreference::default(), style.clone());
		c.set_theme(ThemeName::DigitalFrost);
		assert_eq!(c.theme(), ThemeName::DigitalFrost);
		assert_eq!(style.attribute(THEME_ATTRIBUTE).as_deref(), Some("digital-frost"));
	}
}
