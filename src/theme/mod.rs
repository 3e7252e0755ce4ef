//! Theme name and light/dark colour mode, applied to the document root and
//! persisted between visits.

mod context;
mod controller;
mod host;
mod types;
mod web;

pub use context::{ThemeContext, provide_theme_context, use_theme};
pub use controller::{
	DARK_CLASS, MODE_STORAGE_KEY, THEME_ATTRIBUTE, THEME_STORAGE_KEY, ThemeController, init_shared,
};
pub use host::{KeyValueStore, PreferenceSource, PreferenceWatch, StyleSink};
pub use types::{ColorMode, ResolvedMode, THEMES, ThemeInfo, ThemeName, ThemeSnapshot};
pub use web::{
	DocumentStyle, LocalStorage, MediaQueryPreference, SharedWebThemeController,
	WebThemeController,
};
