use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::explorer::snapshot::ViewSnapshot;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub snapshot: ViewSnapshot,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
