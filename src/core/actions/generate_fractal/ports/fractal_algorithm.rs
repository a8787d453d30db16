use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven over a grid by the `generate_fractal_*` drivers.
///
/// Implementations must not depend on any other pixel's result.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
