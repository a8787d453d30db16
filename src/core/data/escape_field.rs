use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeFieldError {
    #[error("grid holds {expected} pixels but {actual} iteration counts were supplied")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("iteration count {count} exceeds the budget {max_iterations}")]
    CountExceedsBudget { count: u32, max_iterations: u32 },
}

/// Row-major iteration counts for one full-grid pass.
///
/// A count equal to `max_iterations` classifies the pixel as inside the set;
/// anything lower escaped after that many bounded iterations. The budget is
/// kept with the counts so the field can be re-shaded without recomputing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    pixel_rect: PixelRect,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl EscapeField {
    pub fn new(
        pixel_rect: PixelRect,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeFieldError> {
        let expected = pixel_rect.size() as usize;

        if counts.len() != expected {
            return Err(EscapeFieldError::SizeMismatch {
                expected,
                actual: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > max_iterations) {
            return Err(EscapeFieldError::CountExceedsBudget {
                count,
                max_iterations,
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            counts,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn count_at(&self, pixel: Point) -> Option<u32> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        self.counts
            .get(relative_y * self.pixel_rect.width() as usize + relative_x)
            .copied()
    }

    #[must_use]
    pub fn is_member(&self, pixel: Point) -> Option<bool> {
        self.count_at(pixel)
            .map(|count| count == self.max_iterations)
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.max_iterations)
            .count()
    }
}
