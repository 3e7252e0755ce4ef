//! Device icons. Each is a small vector composition centred on `(x, y)` and scaled
//! uniformly by `scale`.

use std::f64::consts::PI;

use super::palette::{CyberColors, with_alpha};
use super::surface::Surface;
use crate::components::network_diagram::NodeKind;

/// Shared icon setup: glow, outline and translucent body fill.
fn begin_icon<S: Surface>(surface: &S, color: &str, blur: f64, fill_alpha: u8) {
	surface.save();
	surface.set_shadow_color(color);
	surface.set_shadow_blur(blur);
	surface.set_stroke_color(color);
	surface.set_fill_color(&with_alpha(color, fill_alpha));
	surface.set_line_width(2.0);
}

/// Draw the icon for `kind`.
pub fn draw_device<S: Surface>(surface: &S, kind: NodeKind, x: f64, y: f64, color: &str, scale: f64) {
	match kind {
		NodeKind::Computer => draw_computer(surface, x, y, color, scale),
		NodeKind::Switch => draw_switch(surface, x, y, color, scale),
		NodeKind::Router => draw_router(surface, x, y, color, scale),
		NodeKind::Modem => draw_modem(surface, x, y, color, scale),
		NodeKind::Cloud => draw_cloud(surface, x, y, color, scale),
		NodeKind::Server => draw_server(surface, x, y, color, scale),
		NodeKind::Dns => draw_dns(surface, x, y, color, scale),
	}
}

pub fn draw_computer<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 15.0, 0x22);
	let (w, h) = (32.0 * scale, 24.0 * scale);

	// Monitor
	surface.fill_rect(x - w / 2.0, y - h / 2.0 - 5.0, w, h);
	surface.stroke_rect(x - w / 2.0, y - h / 2.0 - 5.0, w, h);

	// Screen
	surface.set_fill_color(&with_alpha(color, 0x44));
	surface.fill_rect(x - w / 2.0 + 3.0, y - h / 2.0 - 2.0, w - 6.0, h - 6.0);

	// Stand
	surface.begin_path();
	surface.move_to(x - 6.0 * scale, y + h / 2.0 - 5.0);
	surface.line_to(x - 10.0 * scale, y + h / 2.0 + 8.0);
	surface.line_to(x + 10.0 * scale, y + h / 2.0 + 8.0);
	surface.line_to(x + 6.0 * scale, y + h / 2.0 - 5.0);
	surface.stroke();

	surface.restore();
}

pub const SWITCH_PORTS: usize = 5;

pub fn draw_switch<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 15.0, 0x22);
	let (w, h) = (50.0 * scale, 18.0 * scale);

	surface.fill_rect(x - w / 2.0, y - h / 2.0, w, h);
	surface.stroke_rect(x - w / 2.0, y - h / 2.0, w, h);

	surface.set_fill_color(color);
	let (port_w, port_h) = (6.0 * scale, 8.0 * scale);
	let spacing = (w - 10.0) / SWITCH_PORTS as f64;
	for i in 0..SWITCH_PORTS {
		let px = x - w / 2.0 + 5.0 + i as f64 * spacing;
		surface.fill_rect(px, y - port_h / 2.0, port_w, port_h);
	}

	surface.restore();
}

pub fn draw_router<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 15.0, 0x22);
	let (w, h) = (40.0 * scale, 16.0 * scale);

	surface.fill_rect(x - w / 2.0, y - h / 2.0 + 5.0, w, h);
	surface.stroke_rect(x - w / 2.0, y - h / 2.0 + 5.0, w, h);

	// Antennas
	surface.begin_path();
	surface.move_to(x - 12.0 * scale, y - h / 2.0 + 5.0);
	surface.line_to(x - 16.0 * scale, y - 20.0 * scale);
	surface.move_to(x + 12.0 * scale, y - h / 2.0 + 5.0);
	surface.line_to(x + 16.0 * scale, y - 20.0 * scale);
	surface.stroke();

	// Signal waves
	surface.set_line_width(1.5);
	for i in 1..=2 {
		surface.begin_path();
		surface.arc(x, y - 15.0 * scale, 6.0 * i as f64 * scale, PI * 1.2, PI * 1.8);
		surface.stroke();
	}

	surface.restore();
}

pub fn draw_modem<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 15.0, 0x22);
	let (w, h) = (24.0 * scale, 32.0 * scale);

	surface.fill_rect(x - w / 2.0, y - h / 2.0, w, h);
	surface.stroke_rect(x - w / 2.0, y - h / 2.0, w, h);

	// Status LEDs
	surface.set_fill_color(CyberColors::ACCENT);
	surface.set_shadow_color(CyberColors::ACCENT);
	for i in 0..3 {
		surface.begin_path();
		surface.arc(x, y - h / 2.0 + 8.0 + i as f64 * 8.0, 2.0 * scale, 0.0, 2.0 * PI);
		surface.fill();
	}

	surface.restore();
}

pub fn draw_cloud<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 20.0, 0x15);

	surface.begin_path();
	surface.arc(x - 15.0 * scale, y + 5.0 * scale, 15.0 * scale, PI * 0.5, PI * 1.5);
	surface.arc(x, y - 10.0 * scale, 18.0 * scale, PI, 0.0);
	surface.arc(x + 18.0 * scale, y + 5.0 * scale, 12.0 * scale, PI * 1.5, PI * 0.5);
	surface.line_to(x - 15.0 * scale, y + 20.0 * scale);
	surface.close_path();
	surface.fill();
	surface.stroke();

	surface.restore();
}

pub fn draw_server<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	begin_icon(surface, color, 15.0, 0x22);
	let (w, h, slot_h) = (28.0 * scale, 36.0 * scale, 10.0 * scale);
	let body = with_alpha(color, 0x22);

	for i in 0..3 {
		let slot_y = y - h / 2.0 + i as f64 * slot_h + 2.0;
		surface.fill_rect(x - w / 2.0, slot_y, w, slot_h - 2.0);
		surface.stroke_rect(x - w / 2.0, slot_y, w, slot_h - 2.0);

		let led = if i == 1 {
			CyberColors::ACCENT
		} else {
			CyberColors::PRIMARY
		};
		surface.set_fill_color(led);
		surface.set_shadow_color(led);
		surface.begin_path();
		surface.arc(x + w / 2.0 - 5.0, slot_y + slot_h / 2.0 - 1.0, 2.0, 0.0, 2.0 * PI);
		surface.fill();
		surface.set_fill_color(&body);
	}

	surface.restore();
}

pub fn draw_dns<S: Surface>(surface: &S, x: f64, y: f64, color: &str, scale: f64) {
	draw_server(surface, x, y, color, scale);

	surface.save();
	surface.set_fill_color(color);
	surface.set_shadow_color(color);
	surface.set_shadow_blur(8.0);
	surface.set_font(&format!("bold {}px monospace", 10.0 * scale));
	surface.set_text_align("center");
	surface.fill_text("DNS", x, y + 28.0 * scale);
	surface.restore();
}
