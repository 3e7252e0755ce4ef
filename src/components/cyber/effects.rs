use super::surface::Surface;

pub const GLITCH_PROBABILITY: f64 = 0.02;

/// Occasionally tear a horizontal strip of the frame sideways.
///
/// `random` must yield uniform values in `[0, 1)`; the browser passes
/// `js_sys::Math::random`. Returns whether a strip was shifted.
pub fn apply_glitch<S: Surface>(
	surface: &S,
	width: f64,
	height: f64,
	probability: f64,
	mut random: impl FnMut() -> f64,
) -> bool {
	if random() > probability {
		return false;
	}

	let strip = (random() * 20.0).floor() + 5.0;
	let y = (random() * (height - strip)).floor();
	let shift = (random() * 10.0).floor() - 5.0;

	match surface.read_pixels(0.0, y, width, strip) {
		Some(pixels) => {
			surface.write_pixels(&pixels, shift, y);
			true
		}
		None => false,
	}
}
