pub mod cyber;
pub mod network_diagram;
mod theme_picker;

pub use theme_picker::ThemePicker;
