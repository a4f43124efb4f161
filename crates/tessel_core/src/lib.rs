//! tessel_core: value types shared by the mesh generators and the renderer.

pub mod color;

// headless wgpu device/queue setup
#[cfg(feature = "gpu")]
pub mod context;

pub use color::Color;
#[cfg(feature = "gpu")]
pub use context::{ContextError, EngineContext};
