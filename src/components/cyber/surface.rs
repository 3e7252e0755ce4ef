use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, ImageData};

/// The subset of a 2-D canvas context the cyber primitives paint with.
///
/// Every call is best-effort: implementations swallow host exceptions instead of
/// reporting them, so a bad coordinate costs a frame, never the page.
pub trait Surface {
	/// Opaque pixel buffer captured by [`Surface::read_pixels`].
	type Pixels;

	fn save(&self);
	fn restore(&self);

	fn begin_path(&self);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	fn close_path(&self);
	fn fill(&self);
	fn stroke(&self);
	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64);

	fn set_fill_color(&self, color: &str);
	fn set_stroke_color(&self, color: &str);
	fn set_line_width(&self, width: f64);
	fn set_line_dash(&self, segments: &[f64]);
	fn set_global_alpha(&self, alpha: f64);
	fn set_shadow_color(&self, color: &str);
	fn set_shadow_blur(&self, blur: f64);

	fn set_font(&self, font: &str);
	fn set_text_align(&self, align: &str);
	fn set_text_baseline(&self, baseline: &str);
	fn fill_text(&self, text: &str, x: f64, y: f64);

	fn read_pixels(&self, x: f64, y: f64, w: f64, h: f64) -> Option<Self::Pixels>;
	fn write_pixels(&self, pixels: &Self::Pixels, x: f64, y: f64);
}

impl Surface for CanvasRenderingContext2d {
	type Pixels = ImageData;

	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		// Throws on a negative radius.
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn close_path(&self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
	}

	fn set_fill_color(&self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke_color(&self, color: &str) {
		self.set_stroke_style_str(color);
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_line_dash(&self, segments: &[f64]) {
		let array = segments
			.iter()
			.map(|&s| JsValue::from_f64(s))
			.collect::<js_sys::Array>();
		let _ = CanvasRenderingContext2d::set_line_dash(self, &array);
	}

	fn set_global_alpha(&self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_shadow_color(&self, color: &str) {
		CanvasRenderingContext2d::set_shadow_color(self, color);
	}

	fn set_shadow_blur(&self, blur: f64) {
		CanvasRenderingContext2d::set_shadow_blur(self, blur);
	}

	fn set_font(&self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn set_text_align(&self, align: &str) {
		CanvasRenderingContext2d::set_text_align(self, align);
	}

	fn set_text_baseline(&self, baseline: &str) {
		CanvasRenderingContext2d::set_text_baseline(self, baseline);
	}

	fn fill_text(&self, text: &str, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::fill_text(self, text, x, y);
	}

	fn read_pixels(&self, x: f64, y: f64, w: f64, h: f64) -> Option<ImageData> {
		// Zero-sized or tainted regions throw.
		self.get_image_data(x, y, w, h).ok()
	}

	fn write_pixels(&self, pixels: &ImageData, x: f64, y: f64) {
		let _ = self.put_image_data(pixels, x, y);
	}
}
