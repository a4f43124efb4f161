pub mod frame_packet;
pub mod pass_trait;

pub use frame_packet::{DrawCommand, FillMode, FramePacket};
pub use pass_trait::RenderPass;
