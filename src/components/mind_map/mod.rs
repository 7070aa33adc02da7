mod component;
mod layout;
mod render;
mod state;
mod surface;
mod types;

pub use component::MindMapView;
pub use types::Concept;
