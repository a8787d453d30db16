//! Command-line overrides for [`ExplorerConfig`], shared by both binaries.

use crate::core::actions::render_escape_field::Execution;
use crate::core::explorer::config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, ExplorerConfig,
};
use crate::core::fractals::mandelbrot::algorithm::IterationStrategy;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::shade::DEFAULT_SHADE_FACTOR;
use clap::Args;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ExplorerArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Starting iteration budget
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Colour map used to shade escape counts
    #[arg(long, value_enum, ignore_case = true, default_value_t = MandelbrotColourMapKind::Shade)]
    pub colour_map: MandelbrotColourMapKind,

    /// Brightness multiplier for the shade colour map
    #[arg(long, default_value_t = DEFAULT_SHADE_FACTOR)]
    pub shade_factor: u32,

    /// Evaluate z² + c directly instead of the incremental form
    #[arg(long)]
    pub naive: bool,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub serial: bool,
}

impl ExplorerArgs {
    pub fn to_config(&self) -> Result<ExplorerConfig, Box<dyn std::error::Error>> {
        let config = ExplorerConfig {
            width: self.width,
            height: self.height,
            initial_iterations: self.iterations,
            colour_map: self.colour_map,
            shade_factor: self.shade_factor,
            strategy: if self.naive {
                IterationStrategy::Naive
            } else {
                IterationStrategy::Incremental
            },
            execution: if self.serial {
                Execution::Serial
            } else {
                Execution::Parallel
            },
            ..ExplorerConfig::default()
        };

        config.validate()?;

        Ok(config)
    }
}
