pub mod builder;
pub mod primitives;
pub mod shape;
pub mod vertex;

pub use builder::MeshBuilder;
pub use shape::Shape;
pub use vertex::Vertex;
