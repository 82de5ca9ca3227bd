use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::params::RenderParameters;

/// Snapshot of everything one render pass reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub params: RenderParameters,
}
