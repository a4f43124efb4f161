pub mod mesh_pass;

pub use mesh_pass::{MeshPass, MeshPassConfig};
