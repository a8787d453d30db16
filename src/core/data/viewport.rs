use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("viewport bounds must be finite")]
    NonFinite,
    #[error("viewport span is not representable: {width}x{height}")]
    SpanOverflow { width: f64, height: f64 },
}

/// The rectangle of the complex plane currently mapped onto the pixel grid.
///
/// `top_left` holds the minimum real and imaginary bounds, `bottom_right` the
/// maximum ones. Both spans are strictly positive for every constructed value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    top_left: Complex,
    bottom_right: Complex,
}

impl Viewport {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ViewportError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ViewportError::NonFinite);
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::SpanOverflow { width, height });
        }

        if !(width > 0.0 && height > 0.0) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(
            Complex::new(real_min, imag_min),
            Complex::new(real_max, imag_max),
        )
    }

    /// Builds `[center ± half_width] × [center ± half_height]`.
    pub fn centered(
        center: Complex,
        half_width: f64,
        half_height: f64,
    ) -> Result<Self, ViewportError> {
        Self::from_bounds(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }

    /// Shifts both bounds of each axis by the given offsets.
    pub fn translated(&self, d_real: f64, d_imag: f64) -> Result<Self, ViewportError> {
        Self::from_bounds(
            self.real_min() + d_real,
            self.real_max() + d_real,
            self.imag_min() + d_imag,
            self.imag_max() + d_imag,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let top_left = Complex::new(-2.0, -1.0);
        let bottom_right = Complex::new(1.0, 1.0);

        let viewport = Viewport::new(top_left, bottom_right).unwrap();

        assert_eq!(viewport.top_left(), top_left);
        assert_eq!(viewport.bottom_right(), bottom_right);
        assert_eq!(viewport.real_min(), -2.0);
        assert_eq!(viewport.real_max(), 1.0);
        assert_eq!(viewport.imag_min(), -1.0);
        assert_eq!(viewport.imag_max(), 1.0);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        let zero_width = Viewport::from_bounds(0.0, 0.0, 0.0, 100.0);
        let negative_width = Viewport::from_bounds(0.0, -100.0, 0.0, 10.0);
        let zero_height = Viewport::from_bounds(0.0, 100.0, 0.0, 0.0);
        let negative_both = Viewport::from_bounds(2.0, -2.0, 2.0, -2.0);

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_width,
            Err(ViewportError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ViewportError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            negative_both,
            Err(ViewportError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::from_bounds(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NonFinite)
        );
        assert_eq!(
            Viewport::from_bounds(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(ViewportError::NonFinite)
        );
    }

    #[test]
    fn test_viewport_rejects_spans_that_overflow() {
        let result = Viewport::from_bounds(-1e308, 1e308, -1.0, 1.0);

        assert!(matches!(
            result,
            Err(ViewportError::SpanOverflow { width, .. }) if width.is_infinite()
        ));
        assert!(Viewport::from_bounds(-1.0, 1.0, -1e308, 1e308).is_err());
    }

    #[test]
    fn test_viewport_dimensions_and_center() {
        let viewport = Viewport::from_bounds(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.width(), 3.5);
        assert_eq!(viewport.height(), 2.0);
        assert_eq!(viewport.center(), Complex::new(-0.75, 0.0));
    }

    #[test]
    fn test_centered_viewport() {
        let viewport = Viewport::centered(Complex::new(1.0, -1.0), 2.0, 0.5).unwrap();

        assert_eq!(viewport.real_min(), -1.0);
        assert_eq!(viewport.real_max(), 3.0);
        assert_eq!(viewport.imag_min(), -1.5);
        assert_eq!(viewport.imag_max(), -0.5);
        assert_eq!(viewport.center(), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_centered_viewport_rejects_zero_extent() {
        assert!(Viewport::centered(Complex::ZERO, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_translated_keeps_spans() {
        let viewport = Viewport::from_bounds(-2.0, 2.0, -1.0, 1.0).unwrap();
        let moved = viewport.translated(1.0, -0.5).unwrap();

        assert_eq!(moved.real_min(), -1.0);
        assert_eq!(moved.real_max(), 3.0);
        assert_eq!(moved.imag_min(), -1.5);
        assert_eq!(moved.imag_max(), 0.5);
        assert_eq!(moved.width(), viewport.width());
        assert_eq!(moved.height(), viewport.height());
    }
}
