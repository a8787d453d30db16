use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be at least 2x2: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// The fixed `W×H` pixel grid. Corners are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = i64::from(bottom_right.x) - i64::from(top_left.x);
        let dy = i64::from(bottom_right.y) - i64::from(top_left.y);

        let width = dx + if dx >= 0 { 1 } else { -1 };
        let height = dy + if dy >= 0 { 1 } else { -1 };

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A grid anchored at the origin with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let too_large = |value: u32| i32::try_from(value).is_err();

        if width < 2 || height < 2 || too_large(width) || too_large(height) {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width()) / f64::from(self.height())
    }
}
