use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::{IterationStrategy, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Everything one render pass reads, captured at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSnapshot {
    pub pixel_rect: PixelRect,
    pub viewport: Viewport,
    pub max_iterations: u32,
}

impl ViewSnapshot {
    pub fn algorithm(
        &self,
        strategy: IterationStrategy,
    ) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.pixel_rect, self.viewport, self.max_iterations, strategy)
    }
}
