//! Neon drawing primitives. Each call saves and restores the surface style, so
//! callers can mix them freely without leaking shadow or dash state.

use std::f64::consts::PI;

use super::palette::grid_rgba;
use super::surface::Surface;

/// Horizon height as a fraction of the surface height.
pub const HORIZON_RATIO: f64 = 0.35;
pub const GRID_ROW_SPACING: f64 = 25.0;
pub const GRID_COLUMN_SPACING: f64 = 50.0;
/// How far columns converge at the horizon (fraction of their offset from centre).
pub const GRID_CONVERGENCE: f64 = 0.1;
pub const SCANLINE_INTENSITY: f64 = 0.03;
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const PACKET_RADIUS: f64 = 6.0;
pub const PACKET_CORE_RADIUS: f64 = 2.0;

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Position) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Point `t` of the way from `self` to `other`.
	pub fn lerp(self, other: Position, t: f64) -> Position {
		Position {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
		}
	}
}

/// Synthwave floor: horizontal rows fading toward the horizon and columns
/// converging on it.
pub fn draw_cyber_grid<S: Surface>(surface: &S, width: f64, height: f64) {
	let horizon = height * HORIZON_RATIO;
	surface.save();
	surface.set_line_width(1.0);

	let mut y = height;
	while y > horizon {
		let alpha = (y - horizon) / (height - horizon) * 0.6;
		surface.set_stroke_color(&grid_rgba(alpha));
		surface.begin_path();
		surface.move_to(0.0, y);
		surface.line_to(width, y);
		surface.stroke();
		y -= GRID_ROW_SPACING;
	}

	let center_x = width / 2.0;
	surface.set_stroke_color(&grid_rgba(0.3));
	let mut x = 0.0;
	while x <= width {
		surface.begin_path();
		surface.move_to(x, height);
		surface.line_to(center_x + (x - center_x) * GRID_CONVERGENCE, horizon);
		surface.stroke();
		x += GRID_COLUMN_SPACING;
	}
	surface.restore();
}

/// CRT texture: a dark 1px band on every third row.
pub fn draw_scanlines<S: Surface>(surface: &S, width: f64, height: f64, intensity: f64) {
	surface.save();
	surface.set_fill_color(&format!("rgba(0, 0, 0, {})", intensity));
	let mut y = 0.0;
	while y < height {
		surface.fill_rect(0.0, y, width, 1.0);
		y += 3.0;
	}
	surface.restore();
}

pub fn draw_neon_circle<S: Surface>(
	surface: &S,
	x: f64,
	y: f64,
	radius: f64,
	color: &str,
	filled: bool,
) {
	surface.save();
	surface.set_shadow_color(color);
	surface.set_shadow_blur(20.0);
	surface.set_stroke_color(color);
	surface.set_fill_color(if filled { color } else { "transparent" });
	surface.set_line_width(2.0);

	surface.begin_path();
	surface.arc(x, y, radius, 0.0, 2.0 * PI);
	if filled {
		surface.fill();
	}
	surface.stroke();

	// Bright core
	surface.set_shadow_blur(8.0);
	surface.set_line_width(1.0);
	surface.stroke();
	surface.restore();
}

pub fn draw_neon_line<S: Surface>(
	surface: &S,
	from: Position,
	to: Position,
	color: &str,
	dashed: bool,
) {
	surface.save();
	surface.set_shadow_color(color);
	surface.set_shadow_blur(12.0);
	surface.set_stroke_color(color);
	surface.set_line_width(2.0);
	if dashed {
		surface.set_line_dash(&[8.0, 4.0]);
	}

	surface.begin_path();
	surface.move_to(from.x, from.y);
	surface.line_to(to.x, to.y);
	surface.stroke();

	// Bright core
	surface.set_shadow_blur(4.0);
	surface.set_line_width(1.0);
	surface.stroke();

	if dashed {
		surface.set_line_dash(&[]);
	}
	surface.restore();
}

/// Packet head plus its fading trail. `trail` is ordered most recent first and
/// is drawn before the head so the head stays on top.
pub fn draw_packet<S: Surface>(surface: &S, at: Position, color: &str, trail: &[Position]) {
	surface.save();

	surface.set_fill_color(color);
	let n = trail.len() as f64;
	for (i, pos) in trail.iter().enumerate() {
		let t = i as f64 / n;
		surface.set_global_alpha(1.0 - t);
		surface.begin_path();
		surface.arc(pos.x, pos.y, 4.0 - t * 2.0, 0.0, 2.0 * PI);
		surface.fill();
	}
	surface.set_global_alpha(1.0);

	surface.set_shadow_color(color);
	surface.set_shadow_blur(15.0);
	surface.begin_path();
	surface.arc(at.x, at.y, PACKET_RADIUS, 0.0, 2.0 * PI);
	surface.fill();

	surface.set_fill_color("#ffffff");
	surface.begin_path();
	surface.arc(at.x, at.y, PACKET_CORE_RADIUS, 0.0, 2.0 * PI);
	surface.fill();

	surface.restore();
}

pub fn draw_label<S: Surface>(surface: &S, text: &str, at: Position, color: &str, font_size: f64) {
	surface.save();
	surface.set_fill_color(color);
	surface.set_shadow_color(color);
	surface.set_shadow_blur(8.0);
	surface.set_font(&format!("{}px \"JetBrains Mono\", monospace", font_size));
	surface.set_text_align("center");
	surface.set_text_baseline("middle");
	surface.fill_text(text, at.x, at.y);
	surface.restore();
}

/// Breathing multiplier in `[0.95, 1.05]` for icon scale.
pub fn pulse_scale(time: f64, offset: f64) -> f64 {
	1.0 + ((time + offset) * 0.003).sin() * 0.05
}
