//! Affine mapping between the pixel grid and the complex plane.
//!
//! Pixels are square: the imaginary span divided by the grid height is the
//! size of one pixel on both axes, so a non-square window never stretches the
//! image. Zoom centering goes through the same mapper, which keeps the point
//! under the cursor and the post-zoom centre in agreement.

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps one axis: `min + (max - min) / extent * pixel`.
#[must_use]
pub fn to_complex(pixel: f64, extent: f64, min: f64, max: f64) -> f64 {
    min + (max - min) / extent * pixel
}

/// Inverse of [`to_complex`] for the same axis parameters.
#[must_use]
pub fn to_pixel(value: f64, extent: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min) * extent
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper {
    pixel_origin: Point,
    extent: f64,
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, viewport: Viewport) -> Self {
        let extent = f64::from(pixel_rect.height());

        Self {
            pixel_origin: pixel_rect.top_left(),
            extent,
            real_min: viewport.real_min(),
            // x reuses the imaginary span over the grid height
            real_max: viewport.real_min() + viewport.height(),
            imag_min: viewport.imag_min(),
            imag_max: viewport.imag_max(),
        }
    }

    /// Size of one pixel in complex-plane units.
    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        (self.imag_max - self.imag_min) / self.extent
    }

    /// Maps a (possibly fractional) screen position to the complex plane.
    #[must_use]
    pub fn to_complex(&self, x: f64, y: f64) -> Complex {
        let relative_x = x - f64::from(self.pixel_origin.x);
        let relative_y = y - f64::from(self.pixel_origin.y);

        Complex {
            real: to_complex(relative_x, self.extent, self.real_min, self.real_max),
            imag: to_complex(relative_y, self.extent, self.imag_min, self.imag_max),
        }
    }

    #[must_use]
    pub fn point_to_complex(&self, pixel: Point) -> Complex {
        self.to_complex(f64::from(pixel.x), f64::from(pixel.y))
    }

    /// Maps a complex value back to fractional screen coordinates.
    #[must_use]
    pub fn to_pixel(&self, value: Complex) -> (f64, f64) {
        let x = to_pixel(value.real, self.extent, self.real_min, self.real_max);
        let y = to_pixel(value.imag, self.extent, self.imag_min, self.imag_max);

        (
            x + f64::from(self.pixel_origin.x),
            y + f64::from(self.pixel_origin.y),
        )
    }
}
