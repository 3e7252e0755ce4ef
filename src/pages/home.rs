use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ThemePicker;
use crate::components::network_diagram::{NetworkDiagramCanvas, all_diagrams};

/// Default Home Page: every diagram in teaching order.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<header class="site-header">
			<div>
				<h1>"Mini Internet"</h1>
				<p class="subtitle">"From one cable to DNS: how computers find each other."</p>
			</div>
			<ThemePicker />
		</header>

		<main class="diagram-list">
			{all_diagrams()
				.iter()
				.map(|config| {
					let kind = config.kind;
					view! {
						<section class="diagram-section" id=kind.to_string()>
							<NetworkDiagramCanvas kind=kind />
							<A href=format!("/diagrams/{kind}")>"Open on its own"</A>
						</section>
					}
				})
				.collect_view()}
		</main>
	}
}
