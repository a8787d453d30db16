use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a full-grid pass fans rows out over the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Parallel,
    Serial,
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parallel => "parallel",
            Self::Serial => "serial",
        })
    }
}

impl FromStr for Execution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parallel" => Ok(Self::Parallel),
            "serial" => Ok(Self::Serial),
            other => Err(format!("unknown execution mode `{other}`")),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderEscapeFieldError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Field(#[from] EscapeFieldError),
}

/// Computes the escape count of every pixel of the algorithm's grid.
///
/// The serial path checks `cancel` once up front; the parallel path polls it
/// per row.
pub fn render_escape_field<C: CancelToken>(
    algorithm: &MandelbrotAlgorithm,
    execution: Execution,
    cancel: &C,
) -> Result<EscapeField, RenderEscapeFieldError> {
    let pixel_rect = algorithm.pixel_rect();

    let counts = match execution {
        Execution::Serial => {
            if cancel.is_cancelled() {
                return Err(Cancelled.into());
            }
            match generate_fractal_serial(pixel_rect, algorithm) {
                Ok(counts) => counts,
                Err(never) => match never {},
            }
        }
        Execution::Parallel => {
            match generate_fractal_parallel_rayon(pixel_rect, algorithm, cancel) {
                Ok(counts) => counts,
                Err(GenerateFractalError::Cancelled(cancelled)) => return Err(cancelled.into()),
                Err(GenerateFractalError::Algorithm(never)) => match never {},
            }
        }
    };

    Ok(EscapeField::new(
        pixel_rect,
        algorithm.max_iterations(),
        counts,
    )?)
}
