use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel of the grid on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct CoordinateEcho;

    impl FractalAlgorithm for CoordinateEcho {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    struct FailsOnSecondRow;

    impl FractalAlgorithm for FailsOnSecondRow {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y > 0 { Err(StubError) } else { Ok(0) }
        }
    }

    #[test]
    fn test_visits_every_pixel_in_row_major_order() {
        let pixel_rect = PixelRect::new(Point { x: 1, y: 5 }, Point { x: 3, y: 6 }).unwrap();

        let results = generate_fractal_serial(pixel_rect, &CoordinateEcho).unwrap();

        assert_eq!(
            results,
            vec![(1, 5), (2, 5), (3, 5), (1, 6), (2, 6), (3, 6)]
        );
    }

    #[test]
    fn test_result_length_matches_grid_size() {
        let pixel_rect = PixelRect::from_size(17, 9).unwrap();

        let results = generate_fractal_serial(pixel_rect, &CoordinateEcho).unwrap();

        assert_eq!(results.len() as u64, pixel_rect.size());
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(3, 3).unwrap();

        assert!(generate_fractal_serial(pixel_rect, &FailsOnSecondRow).is_err());
    }
}
