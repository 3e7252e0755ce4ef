mod catalog;
mod component;
mod render;
mod state;
mod types;

pub use catalog::{all_diagrams, get_diagram_by_id};
pub use component::NetworkDiagramCanvas;
pub use types::NodeKind;
