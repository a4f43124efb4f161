//! Low-level GPU allocation helpers.

pub mod buffer;
pub mod draw_uniforms;
pub mod texture;

pub use buffer::VertexUpload;
pub use draw_uniforms::{DrawUniform, DrawUniformBuffer};
