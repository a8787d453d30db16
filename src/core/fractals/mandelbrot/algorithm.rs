use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::coordinate_mapper::CoordinateMapper;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// How the recurrence `z ← z² + c` is evaluated. Both strategies classify
/// every point identically; `Incremental` saves one multiply per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationStrategy {
    #[default]
    Incremental,
    Naive,
}

impl IterationStrategy {
    #[must_use]
    pub fn escape_time(self, c: Complex, max_iterations: u32) -> u32 {
        match self {
            Self::Incremental => escape_time(c, max_iterations),
            Self::Naive => escape_time_naive(c, max_iterations),
        }
    }
}

impl fmt::Display for IterationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incremental => f.write_str("incremental"),
            Self::Naive => f.write_str("naive"),
        }
    }
}

impl FromStr for IterationStrategy {
    type Err = MandelbrotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incremental" => Ok(Self::Incremental),
            "naive" => Ok(Self::Naive),
            other => Err(MandelbrotError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Number of iterations that stayed inside the escape radius, or
/// `max_iterations` if the orbit never left it.
///
/// The escape test runs after each step, so any `|c| > 2` returns 0.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut re = 0.0;
    let mut im = 0.0;
    let mut re_sq = 0.0;
    let mut im_sq = 0.0;

    for iteration in 0..max_iterations {
        im = 2.0 * re * im + c.imag;
        re = re_sq - im_sq + c.real;
        re_sq = re * re;
        im_sq = im * im;

        if re_sq + im_sq > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

/// Same classification as [`escape_time`], squaring through a full complex multiply.
#[must_use]
pub fn escape_time_naive(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    mapper: CoordinateMapper,
    max_iterations: u32,
    strategy: IterationStrategy,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.mapper.point_to_complex(pixel);

        Ok(self.strategy.escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: Viewport,
        max_iterations: u32,
        strategy: IterationStrategy,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            viewport,
            mapper: CoordinateMapper::new(pixel_rect, viewport),
            max_iterations,
            strategy,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn strategy(&self) -> IterationStrategy {
        self.strategy
    }
}
