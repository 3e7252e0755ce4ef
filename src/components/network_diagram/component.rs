use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::catalog::get_diagram;
use super::render::{self, RenderOptions};
use super::state::DiagramState;
use super::types::DiagramKind;
use crate::components::cyber::{GLITCH_PROBABILITY, SCANLINE_INTENSITY};
use crate::error::HostError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Slot holding a self-rescheduling frame callback. The callback reaches the slot
/// through a weak [`FrameLoop::handle`], so dropping the loop frees it.
struct FrameLoop<C> {
	slot: Rc<RefCell<Option<C>>>,
}

impl<C> FrameLoop<C> {
	fn new() -> Self {
		Self {
			slot: Rc::new(RefCell::new(None)),
		}
	}

	fn handle(&self) -> Weak<RefCell<Option<C>>> {
		Rc::downgrade(&self.slot)
	}

	fn set(&self, callback: C) {
		*self.slot.borrow_mut() = Some(callback);
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, HostError> {
	canvas
		.get_context("2d")
		.map_err(|e| HostError::js("getContext(\"2d\")", e))?
		.ok_or(HostError::Unavailable("2d canvas context"))?
		.dyn_into()
		.map_err(|_| HostError::Unavailable("2d canvas context"))
}

/// Schedule `callback` and remember the request id in `pending` (0 when none).
fn request_frame(callback: &FrameCallback, pending: &AtomicI32) {
	let Some(window) = web_sys::window() else {
		warn!("{}", HostError::NoWindow);
		return;
	};
	match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
		Ok(id) => pending.store(id, Ordering::Relaxed),
		Err(e) => warn!("{}", HostError::js("requestAnimationFrame", e)),
	}
}

fn cancel_frame(pending: &AtomicI32) {
	let id = pending.swap(0, Ordering::Relaxed);
	if id == 0 {
		return;
	}
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.cancel_animation_frame(id) {
		warn!("{}", HostError::js("cancelAnimationFrame", e));
	}
}

/// Animated canvas for one catalog diagram, with its title and description.
#[component]
pub fn NetworkDiagramCanvas(
	kind: DiagramKind,
	#[prop(default = SCANLINE_INTENSITY)] scanline_intensity: f64,
	#[prop(default = GLITCH_PROBABILITY)] glitch_probability: f64,
	#[prop(default = true)] show_grid: bool,
	/// When false the first frame is drawn and packets stay on their start node.
	#[prop(default = true)]
	animated: bool,
) -> impl IntoView {
	let Some(config) = get_diagram(kind) else {
		warn!("no diagram registered for `{kind}`");
		return view! { <p class="network-diagram-missing">"Diagram unavailable"</p> }.into_any();
	};

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let options = RenderOptions {
		scanline_intensity,
		glitch_probability,
		show_grid,
	};
	let pending = Arc::new(AtomicI32::new(0));
	// Owned by the component; disposing it drops the frame callback.
	let frames = StoredValue::new_local(FrameLoop::<FrameCallback>::new());
	let pending_init = pending.clone();
	let replay = Arc::new(AtomicBool::new(false));
	let replay_init = replay.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("diagram `{kind}`: {e}");
				return;
			}
		};

		let mut state = DiagramState::new(config);
		state.animation_running = animated;
		debug!(
			"diagram `{kind}`: {} nodes, {} packets",
			config.nodes.len(),
			state.packets.len()
		);

		let handle = frames.with_value(FrameLoop::handle);
		let (pending_anim, replay_anim) = (pending_init.clone(), replay_init.clone());
		let animate: FrameCallback = Closure::new(move |time: f64| {
			pending_anim.store(0, Ordering::Relaxed);
			if replay_anim.swap(false, Ordering::Relaxed) {
				state.reset();
			}
			if state.animation_running {
				state.tick();
			}
			render::render(&state, &ctx, time, &options, js_sys::Math::random);
			let Some(slot) = handle.upgrade() else {
				return;
			};
			if let Some(cb) = slot.borrow().as_ref() {
				request_frame(cb, &pending_anim);
			}
		});
		cancel_frame(&pending_init);
		request_frame(&animate, &pending_init);
		frames.with_value(|f| f.set(animate));
	});

	// Runs before the frame loop itself is dropped with the owner.
	on_cleanup(move || cancel_frame(&pending));

	let (width, height) = (config.width, config.height);
	view! {
		<figure class="network-diagram">
			<canvas
				node_ref=canvas_ref
				class="network-diagram-canvas"
				title="Click to replay"
				on:click=move |_| replay.store(true, Ordering::Relaxed)
				width=width.to_string()
				height=height.to_string()
				style=format!("display: block; width: 100%; max-width: {width}px;")
			/>
			<figcaption>
				<h2>{config.title.as_str()}</h2>
				<p class="subtitle">{config.description.as_str()}</p>
			</figcaption>
		</figure>
	}
	.into_any()
}
