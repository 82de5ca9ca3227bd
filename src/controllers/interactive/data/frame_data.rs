use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::Arc;
use std::time::Duration;

/// Which pass produced a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    Fractal,
    /// Automaton generation counted from the last fractal render.
    Automaton { step: u64 },
}

#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: Arc<PixelBuffer>,
    pub source: FrameSource,
    pub render_duration: Duration,
}
