use crate::components::cyber::{
	CyberColors, GLITCH_PROBABILITY, LABEL_FONT_SIZE, SCANLINE_INTENSITY, Surface, apply_glitch,
	draw_cyber_grid, draw_device, draw_label, draw_neon_circle, draw_neon_line, draw_packet,
	draw_scanlines, pulse_scale,
};

use super::state::DiagramState;

/// Vertical gap between a node's centre and its label.
pub const LABEL_OFFSET: f64 = 35.0;
/// Pulse phase step between consecutive nodes so they breathe out of sync.
pub const PULSE_PHASE_STEP: f64 = 500.0;
pub const HOP_RING_RADIUS: f64 = 26.0;

/// Per-canvas presentation knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
	pub scanline_intensity: f64,
	pub glitch_probability: f64,
	pub show_grid: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			scanline_intensity: SCANLINE_INTENSITY,
			glitch_probability: GLITCH_PROBABILITY,
			show_grid: true,
		}
	}
}

/// Paint one frame. `time` is the animation-frame timestamp in milliseconds.
pub fn render<S: Surface>(
	state: &DiagramState,
	surface: &S,
	time: f64,
	options: &RenderOptions,
	random: impl FnMut() -> f64,
) {
	let (width, height) = (state.config.width, state.config.height);

	surface.set_fill_color(CyberColors::BACKGROUND);
	surface.fill_rect(0.0, 0.0, width, height);
	if options.show_grid {
		draw_cyber_grid(surface, width, height);
	}

	draw_connections(state, surface);
	draw_nodes(state, surface, time);
	draw_packets(state, surface);

	if options.scanline_intensity > 0.0 {
		draw_scanlines(surface, width, height, options.scanline_intensity);
	}
	apply_glitch(surface, width, height, options.glitch_probability, random);
}

fn draw_connections<S: Surface>(state: &DiagramState, surface: &S) {
	let config = state.config;
	for connection in &config.connections {
		let (Some(from), Some(to)) = (config.node(&connection.from), config.node(&connection.to))
		else {
			continue;
		};
		let color = connection.color.as_deref().unwrap_or(CyberColors::PRIMARY);
		draw_neon_line(surface, from.position, to.position, color, connection.dashed);
	}
}

fn draw_packets<S: Surface>(state: &DiagramState, surface: &S) {
	for packet in &state.packets {
		if let Some(hop) = packet.recent_hop() {
			draw_neon_circle(surface, hop.x, hop.y, HOP_RING_RADIUS, &packet.color, false);
		}
		draw_packet(surface, packet.position(), &packet.color, &packet.trail());
	}
}

fn draw_nodes<S: Surface>(state: &DiagramState, surface: &S, time: f64) {
	for (i, node) in state.config.nodes.iter().enumerate() {
		let color = node.color.as_deref().unwrap_or(CyberColors::PRIMARY);
		let (x, y) = (node.position.x, node.position.y);
		let scale = pulse_scale(time, i as f64 * PULSE_PHASE_STEP);

		draw_device(surface, node.kind, x, y, color, scale);
		let mut label_at = node.position;
		label_at.y += LABEL_OFFSET;
		draw_label(surface, &node.label, label_at, CyberColors::TEXT, LABEL_FONT_SIZE);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::cyber::recording::{Op, RecordingSurface};
	use crate::components::network_diagram::catalog::get_diagram;
	use crate::components::network_diagram::types::DiagramKind;

	fn never() -> f64 {
		1.0
	}

	#[test]
	fn test_frame_starts_with_background() {
		let config = get_diagram(DiagramKind::Router).unwrap();
		let state = DiagramState::new(config);
		let surface = RecordingSurface::default();
		render(&state, &surface, 0.0, &RenderOptions::default(), never);

		let ops = surface.ops();
		assert_eq!(ops[0], Op::FillColor(CyberColors::BACKGROUND.into()));
		assert_eq!(ops[1], Op::FillRect(0.0, 0.0, 700.0, 320.0));
		assert_eq!(
			surface.count(|op| matches!(op, Op::ReadPixels(..))),
			0,
			"glitch fired with a draw above the probability"
		);
	}

	#[test]
	fn test_every_label_is_drawn() {
		for kind in [DiagramKind::Dns, DiagramKind::Mesh] {
			let config = get_diagram(kind).unwrap();
			let state = DiagramState::new(config);
			let surface = RecordingSurface::default();
			render(&state, &surface, 1234.0, &RenderOptions::default(), never);

			let ops = surface.ops();
			for node in &config.nodes {
				let expected = Op::FillText(
					node.label.clone(),
					node.position.x,
					node.position.y + LABEL_OFFSET,
				);
				assert!(ops.contains(&expected), "{kind}: missing label {}", node.label);
			}
		}
	}

	#[test]
	fn test_mesh_edges_are_dashed() {
		let config = get_diagram(DiagramKind::Mesh).unwrap();
		let state = DiagramState::new(config);
		let surface = RecordingSurface::default();
		let options = RenderOptions {
			show_grid: false,
			scanline_intensity: 0.0,
			..RenderOptions::default()
		};
		render(&state, &surface, 0.0, &options, never);

		assert_eq!(
			surface.count(|op| *op == Op::LineDash(vec![8.0, 4.0])),
			config.connections.len()
		);
		let scanlines =
			surface.count(|op| matches!(op, Op::FillRect(_, _, w, h) if *w == 600.0 && *h == 1.0));
		assert_eq!(scanlines, 0);
	}

	#[test]
	fn test_packets_drawn_over_nodes() {
		let config = get_diagram(DiagramKind::TwoComputers).unwrap();
		let state = DiagramState::new(config);
		let surface = RecordingSurface::default();
		render(&state, &surface, 0.0, &RenderOptions::default(), never);

		let ops = surface.ops();
		let head = ops
			.iter()
			.position(|op| matches!(op, Op::Arc { radius, .. } if *radius == 6.0))
			.unwrap();
		let last_label = ops
			.iter()
			.rposition(|op| matches!(op, Op::FillText(..)))
			.unwrap();
		assert!(head > last_label);
	}
}
