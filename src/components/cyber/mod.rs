mod draw;
mod effects;
mod icons;
mod palette;
mod surface;

pub use draw::{
	LABEL_FONT_SIZE, Position, SCANLINE_INTENSITY, draw_cyber_grid, draw_label, draw_neon_circle,
	draw_neon_line, draw_packet, draw_scanlines, pulse_scale,
};
pub use effects::{GLITCH_PROBABILITY, apply_glitch};
pub use icons::draw_device;
pub use palette::CyberColors;
pub use surface::Surface;

#[cfg(test)]
pub(crate) use surface::recording;
