use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::render_escape_field::{
    Execution, RenderEscapeFieldError, render_escape_field,
};
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::explorer::snapshot::ViewSnapshot;
use crate::core::fractals::mandelbrot::algorithm::IterationStrategy;
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::shade::DEFAULT_SHADE_FACTOR;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use thiserror::Error;

/// How a snapshot is turned into pixels. Changing these never moves the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub strategy: IterationStrategy,
    pub execution: Execution,
    pub colour_map: MandelbrotColourMapKind,
    pub shade_factor: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            strategy: IterationStrategy::default(),
            execution: Execution::default(),
            colour_map: MandelbrotColourMapKind::default(),
            shade_factor: DEFAULT_SHADE_FACTOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedView {
    pub field: EscapeField,
    pub pixel_buffer: PixelBuffer,
}

#[derive(Debug, Error)]
pub enum RenderViewError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
    #[error(transparent)]
    Field(#[from] EscapeFieldError),
    #[error(transparent)]
    Shade(GeneratePixelBufferError),
}

impl RenderViewError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl From<RenderEscapeFieldError> for RenderViewError {
    fn from(err: RenderEscapeFieldError) -> Self {
        match err {
            RenderEscapeFieldError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            RenderEscapeFieldError::Field(err) => Self::Field(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderViewError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            other => Self::Shade(other),
        }
    }
}

/// Computes the escape field for `snapshot` and shades it.
pub fn render_view<C: CancelToken>(
    snapshot: &ViewSnapshot,
    settings: &RenderSettings,
    cancel: &C,
) -> Result<RenderedView, RenderViewError> {
    let algorithm = snapshot.algorithm(settings.strategy)?;
    let field = render_escape_field(&algorithm, settings.execution, cancel)?;

    if cancel.is_cancelled() {
        return Err(Cancelled.into());
    }

    let pixel_buffer = shade_field_cancelable(&field, settings, cancel)?;

    Ok(RenderedView {
        field,
        pixel_buffer,
    })
}

/// Renders views while keeping the last escape field around, so a change
/// that only touches the colour map or shade factor re-shades instead of
/// iterating every pixel again.
#[derive(Debug, Default)]
pub struct ViewRenderer {
    cached: Option<CachedField>,
    escape_passes: u64,
}

#[derive(Debug)]
struct CachedField {
    snapshot: ViewSnapshot,
    strategy: IterationStrategy,
    field: EscapeField,
}

impl ViewRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of full escape-time computations performed so far.
    #[must_use]
    pub fn escape_passes(&self) -> u64 {
        self.escape_passes
    }

    pub fn render<C: CancelToken>(
        &mut self,
        snapshot: &ViewSnapshot,
        settings: &RenderSettings,
        cancel: &C,
    ) -> Result<RenderedView, RenderViewError> {
        if let Some(cached) = &self.cached {
            if cached.snapshot == *snapshot && cached.strategy == settings.strategy {
                let pixel_buffer = shade_field_cancelable(&cached.field, settings, cancel)?;
                return Ok(RenderedView {
                    field: cached.field.clone(),
                    pixel_buffer,
                });
            }
        }

        let view = render_view(snapshot, settings, cancel)?;
        self.escape_passes += 1;
        self.cached = Some(CachedField {
            snapshot: *snapshot,
            strategy: settings.strategy,
            field: view.field.clone(),
        });

        Ok(view)
    }
}

/// Colours an existing field without recomputing escape counts.
pub fn shade_field(
    field: &EscapeField,
    settings: &RenderSettings,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    shade_field_cancelable(field, settings, &NeverCancel)
}

fn shade_field_cancelable<C: CancelToken>(
    field: &EscapeField,
    settings: &RenderSettings,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let colour_map = mandelbrot_colour_map_factory(
        settings.colour_map,
        field.max_iterations(),
        settings.shade_factor,
    );

    generate_pixel_buffer(field.counts(), &colour_map, field.pixel_rect(), cancel)
}
