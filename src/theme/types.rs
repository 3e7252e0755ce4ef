use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Colour theme applied through the root `data-theme` attribute.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeName {
	/// Plain slate; no `data-theme` attribute at all.
	Default,
	/// Amber phosphor.
	#[default]
	Neuromancer,
	/// Terminal green.
	NeonMatrix,
	/// Synthwave pink.
	CyberMagenta,
	/// Ice blue.
	DigitalFrost,
}

/// User-facing colour mode setting. `System` defers to the host preference.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
	/// Always light.
	Light,
	/// Always dark.
	Dark,
	/// Follow `prefers-color-scheme`.
	#[default]
	System,
}

/// Concrete mode after resolving [`ColorMode::System`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ResolvedMode {
	#[default]
	/// No `dark` class.
	Light,
	/// `dark` class on the root.
	Dark,
}

impl ResolvedMode {
	/// Whether the `dark` class should be on the root.
	pub fn is_dark(self) -> bool {
		self == ResolvedMode::Dark
	}

	/// The other mode; what a toggle switches to.
	pub fn opposite(self) -> Self {
		match self {
			ResolvedMode::Light => ResolvedMode::Dark,
			ResolvedMode::Dark => ResolvedMode::Light,
		}
	}
}

impl From<ResolvedMode> for ColorMode {
	fn from(mode: ResolvedMode) -> Self {
		match mode {
			ResolvedMode::Light => ColorMode::Light,
			ResolvedMode::Dark => ColorMode::Dark,
		}
	}
}

/// Picker metadata for a theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeInfo {
	/// Display name.
	pub name: &'static str,
	/// The theme this entry describes.
	pub value: ThemeName,
	/// CSS colour for the picker swatch.
	pub primary_color: &'static str,
	/// One-line blurb shown as the option tooltip.
	pub description: &'static str,
}

/// Every theme in picker order.
pub static THEMES: [ThemeInfo; 5] = [
	ThemeInfo {
		name: "Neuromancer",
		value: ThemeName::Neuromancer,
		primary_color: "oklch(0.82 0.30 65)",
		description: "Amber phosphor. Gibson's matrix.",
	},
	ThemeInfo {
		name: "Default",
		value: ThemeName::Default,
		primary_color: "oklch(0.208 0.042 265.755)",
		description: "Clean slate blue",
	},
	ThemeInfo {
		name: "Neon Matrix",
		value: ThemeName::NeonMatrix,
		primary_color: "oklch(0.80 0.28 145)",
		description: "Matrix green terminal",
	},
	ThemeInfo {
		name: "Cyber Magenta",
		value: ThemeName::CyberMagenta,
		primary_color: "oklch(0.72 0.30 330)",
		description: "Synthwave pink",
	},
	ThemeInfo {
		name: "Digital Frost",
		value: ThemeName::DigitalFrost,
		primary_color: "oklch(0.85 0.18 195)",
		description: "Ice blue tech",
	},
];

impl ThemeName {
	/// Picker metadata for this theme.
	pub fn info(self) -> &'static ThemeInfo {
		THEMES
			.iter()
			.find(|t| t.value == self)
			.unwrap_or(&THEMES[0])
	}
}

/// Point-in-time view of the controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
	/// Active theme.
	pub theme: ThemeName,
	/// The user's mode setting.
	pub color_mode: ColorMode,
	/// What `color_mode` currently amounts to.
	pub resolved: ResolvedMode,
}
