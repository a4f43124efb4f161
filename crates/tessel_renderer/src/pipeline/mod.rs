pub mod layout;
pub mod mesh;

pub use layout::PipelineLayouts;
pub use mesh::{MeshPipeline, WireframeBias};
