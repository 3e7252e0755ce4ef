//! Browser-only checks for the DOM-backed theme adapters.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use mini_internet::theme::{
	DocumentStyle, KeyValueStore, LocalStorage, StyleSink, THEME_ATTRIBUTE, ThemeName,
	WebThemeController,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> web_sys::Element {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.expect("document element")
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
	let mut store = LocalStorage::from_window();
	store.set("mini-internet-test", "neon-matrix").unwrap();
	assert_eq!(store.get("mini-internet-test").as_deref(), Some("neon-matrix"));
	assert_eq!(store.get("mini-internet-missing"), None);
}

#[wasm_bindgen_test]
fn document_style_toggles_class() {
	let mut style = DocumentStyle::from_window();
	style.set_class("dark", true).unwrap();
	assert!(root().class_list().contains("dark"));
	style.set_class("dark", false).unwrap();
	assert!(!root().class_list().contains("dark"));
}

#[wasm_bindgen_test]
fn controller_writes_root_attribute() {
	let mut controller = WebThemeController::from_window();
	controller.set_theme(ThemeName::CyberMagenta);
	assert_eq!(
		root().get_attribute(THEME_ATTRIBUTE).as_deref(),
		Some("cyber-magenta")
	);

	controller.set_theme(ThemeName::Default);
	assert_eq!(root().get_attribute(THEME_ATTRIBUTE), None);

	let mut reloaded = WebThemeController::from_window();
	reloaded.init_theme();
	assert_eq!(reloaded.theme(), ThemeName::Default);
}
