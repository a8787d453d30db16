use crate::core::actions::render_escape_field::Execution;
use crate::core::actions::render_view::RenderSettings;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::IterationStrategy;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::shade::DEFAULT_SHADE_FACTOR;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerConfigError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("initial iteration budget must be greater than zero")]
    ZeroIterations,
    #[error("{name} must be greater than zero")]
    ZeroIterationStep { name: &'static str },
    #[error("{name} must be {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Startup parameters for an exploration session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub initial_iterations: u32,
    pub zoom_in_iteration_step: u32,
    pub zoom_out_iteration_step: u32,
    pub continuous_zoom_iteration_step: u32,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub recenter_factor: f64,
    pub pan_fraction: f64,
    /// Share of each span removed per continuous-zoom tick.
    pub continuous_zoom_fraction: f64,
    pub imag_half_extent: f64,
    pub center: Complex,
    pub shade_factor: u32,
    pub colour_map: MandelbrotColourMapKind,
    pub strategy: IterationStrategy,
    pub execution: Execution,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_in_iteration_step: 20,
            zoom_out_iteration_step: 10,
            continuous_zoom_iteration_step: 1,
            zoom_in_factor: 0.25,
            zoom_out_factor: 2.0,
            recenter_factor: 0.5,
            pan_fraction: 0.25,
            continuous_zoom_fraction: 0.2,
            imag_half_extent: 2.0,
            center: Complex::ZERO,
            shade_factor: DEFAULT_SHADE_FACTOR,
            colour_map: MandelbrotColourMapKind::default(),
            strategy: IterationStrategy::default(),
            execution: Execution::default(),
        }
    }
}

fn check(
    name: &'static str,
    expected: &'static str,
    value: f64,
    ok: impl Fn(f64) -> bool,
) -> Result<(), ExplorerConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ExplorerConfigError::OutOfRange {
            name,
            expected,
            value,
        })
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ExplorerConfigError> {
        self.pixel_rect()?;

        if self.initial_iterations == 0 {
            return Err(ExplorerConfigError::ZeroIterations);
        }
        if self.zoom_in_iteration_step == 0 {
            return Err(ExplorerConfigError::ZeroIterationStep {
                name: "zoom_in_iteration_step",
            });
        }
        if self.continuous_zoom_iteration_step == 0 {
            return Err(ExplorerConfigError::ZeroIterationStep {
                name: "continuous_zoom_iteration_step",
            });
        }

        check("zoom_in_factor", "in (0, 1)", self.zoom_in_factor, |v| {
            v > 0.0 && v < 1.0
        })?;
        check("zoom_out_factor", "greater than 1", self.zoom_out_factor, |v| {
            v > 1.0
        })?;
        check("recenter_factor", "in (0, 1]", self.recenter_factor, |v| {
            v > 0.0 && v <= 1.0
        })?;
        check("pan_fraction", "positive", self.pan_fraction, |v| v > 0.0)?;
        check(
            "continuous_zoom_fraction",
            "in (0, 1)",
            self.continuous_zoom_fraction,
            |v| v > 0.0 && v < 1.0,
        )?;
        check("imag_half_extent", "positive", self.imag_half_extent, |v| {
            v > 0.0
        })?;

        self.initial_viewport()?;

        Ok(())
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            strategy: self.strategy,
            execution: self.execution,
            colour_map: self.colour_map,
            shade_factor: self.shade_factor,
        }
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::from_size(self.width, self.height)
    }

    /// `center ± (imag_half_extent · W / H, imag_half_extent)`.
    pub fn initial_viewport(&self) -> Result<Viewport, ExplorerConfigError> {
        let aspect = self.pixel_rect()?.aspect_ratio();

        Ok(Viewport::centered(
            self.center,
            self.imag_half_extent * aspect,
            self.imag_half_extent,
        )?)
    }
}
