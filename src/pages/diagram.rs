use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::ThemePicker;
use crate::components::network_diagram::{NetworkDiagramCanvas, get_diagram_by_id};
use crate::pages::not_found::NotFound;

/// A single diagram addressed as `/diagrams/:id`.
#[component]
pub fn DiagramPage() -> impl IntoView {
	let params = use_params_map();
	let config = move || {
		params
			.read()
			.get("id")
			.as_deref()
			.and_then(get_diagram_by_id)
	};

	move || match config() {
		Some(config) => view! {
			<header class="site-header">
				<A href="/">"All diagrams"</A>
				<ThemePicker />
			</header>
			<main class="diagram-detail">
				<NetworkDiagramCanvas kind=config.kind />
			</main>
		}
		.into_any(),
		None => view! { <NotFound /> }.into_any(),
	}
}
