/// Neon palette used by every diagram.
pub struct CyberColors;

impl CyberColors {
	pub const BACKGROUND: &'static str = "#0a0a0f";
	pub const GRID: &'static str = "#1a1a2e";
	/// Cyan.
	pub const PRIMARY: &'static str = "#00ffff";
	/// Magenta.
	pub const SECONDARY: &'static str = "#ff00ff";
	/// Matrix green.
	pub const ACCENT: &'static str = "#00ff00";
	/// Hot pink.
	pub const WARNING: &'static str = "#ff3366";
	pub const TEXT: &'static str = "#ffffff";
}

/// `GRID` as an `rgba(...)` string with the given alpha.
pub fn grid_rgba(alpha: f64) -> String {
	let channel = |i: usize| u8::from_str_radix(&CyberColors::GRID[i..i + 2], 16).unwrap_or(0);
	format!("rgba({}, {}, {}, {})", channel(1), channel(3), channel(5), alpha)
}

/// Append a two-digit hex alpha to a `#rrggbb` colour.
pub fn with_alpha(color: &str, alpha: u8) -> String {
	format!("{color}{alpha:02x}")
}
