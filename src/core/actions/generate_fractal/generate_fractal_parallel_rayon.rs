use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Failure of a cancelable grid pass.
///
/// Cancellation is expected control flow and should not be shown as an error.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Evaluates every pixel of the grid on the rayon pool.
///
/// Rows are distributed across workers and reassembled in row-major order,
/// so the output is identical to [`generate_fractal_serial`]. `cancel` is
/// polled at the start of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`]
/// pixels within a row.
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let y_start = pixel_rect.top_left().y;
    let y_end = pixel_rect.bottom_right().y;
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = (x_end - x_start + 1) as usize;

    let rows: Vec<Vec<Alg::Success>> = (y_start..=y_end)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                row.push(
                    algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)?,
                );
            }

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    let mut results = Vec::with_capacity(pixel_rect.size() as usize);
    for row in rows {
        results.extend(row);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq, Error)]
    #[error("StubError")]
    struct StubError;

    struct SumOfCoordinates;

    impl FractalAlgorithm for SumOfCoordinates {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x + 3 * pixel.y) as u64)
        }
    }

    struct AlwaysFails;

    impl FractalAlgorithm for AlwaysFails {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError)
        }
    }

    #[test]
    fn test_matches_serial_output() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 8 }).unwrap();

        let serial = generate_fractal_serial(pixel_rect, &SumOfCoordinates).unwrap();
        let parallel =
            generate_fractal_parallel_rayon(pixel_rect, &SumOfCoordinates, &NeverCancel)
                .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_matches_serial_output_for_offset_grid() {
        let pixel_rect = PixelRect::new(Point { x: 5, y: 7 }, Point { x: 6, y: 8 }).unwrap();

        let serial = generate_fractal_serial(pixel_rect, &SumOfCoordinates).unwrap();
        let parallel =
            generate_fractal_parallel_rayon(pixel_rect, &SumOfCoordinates, &NeverCancel)
                .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_matches_serial_output_for_rows_wider_than_check_interval() {
        let pixel_rect = PixelRect::from_size(2 * CANCEL_CHECK_INTERVAL_PIXELS as u32 + 3, 4).unwrap();

        let serial = generate_fractal_serial(pixel_rect, &SumOfCoordinates).unwrap();
        let cancelable =
            generate_fractal_parallel_rayon(pixel_rect, &SumOfCoordinates, &NeverCancel)
                .unwrap();

        assert_eq!(cancelable, serial);
    }

    #[test]
    fn test_cancelable_stops_when_token_is_raised() {
        let pixel_rect = PixelRect::from_size(11, 9).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_fractal_parallel_rayon(pixel_rect, &SumOfCoordinates, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_checks_token_once_per_row_for_narrow_grids() {
        let pixel_rect = PixelRect::from_size(8, 6).unwrap();
        let checks = AtomicUsize::new(0);
        let cancel_token = || {
            checks.fetch_add(1, Ordering::Relaxed);
            false
        };

        generate_fractal_parallel_rayon(pixel_rect, &SumOfCoordinates, &cancel_token)
            .unwrap();

        assert_eq!(checks.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_cancelable_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(4, 5).unwrap();

        let result =
            generate_fractal_parallel_rayon(pixel_rect, &AlwaysFails, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(StubError))));
    }

    #[test]
    fn test_error_display() {
        let cancelled: GenerateFractalError<StubError> = Cancelled.into();
        let failed = GenerateFractalError::Algorithm(StubError);

        assert_eq!(cancelled.to_string(), "render cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
