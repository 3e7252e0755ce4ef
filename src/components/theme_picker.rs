use leptos::prelude::*;

use crate::theme::{ColorMode, THEMES, use_theme};

/// Theme dropdown with a swatch of the active theme and a light/dark toggle.
#[component]
pub fn ThemePicker() -> impl IntoView {
	let theme = use_theme();
	let on_change = move |ev: web_sys::Event| theme.set_theme_by_name(&event_target_value(&ev));
	let swatch = move || {
		format!(
			"background: {};",
			theme.snapshot().theme.info().primary_color
		)
	};

	view! {
		<div class="theme-picker">
			<span class="theme-swatch" style=swatch />
			<select aria-label="Theme" on:change=on_change>
				{THEMES
					.iter()
					.map(|info| {
						let value: &'static str = info.value.into();
						let selected = move || theme.snapshot().theme == info.value;
						view! {
							<option value=value selected=selected title=info.description>
								{info.name}
							</option>
						}
					})
					.collect_view()}
			</select>
			<button
				type="button"
				class="color-mode-toggle"
				on:click=move |_| theme.toggle_color_mode()
			>
				{move || if theme.snapshot().resolved.is_dark() { "Light mode" } else { "Dark mode" }}
			</button>
			// Toggling pins light or dark; this hands control back to the OS.
			<button
				type="button"
				class="color-mode-system"
				disabled=move || theme.snapshot().color_mode == ColorMode::System
				on:click=move |_| theme.set_color_mode(ColorMode::System)
			>
				"Follow system"
			</button>
		</div>
	}
}
