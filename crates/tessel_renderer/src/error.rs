use thiserror::Error;

/// Failures surfaced by mesh rendering and frame readback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("shader '{0}' is not registered")]
    ShaderNotFound(String),
    #[error("frame readback failed: {0}")]
    Readback(String),
}
