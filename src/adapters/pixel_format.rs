//! Pixel format conversion helpers for presentation adapters.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("source length {len} is not a multiple of 3")]
    NotRgb { len: usize },
    #[error("destination length {actual} does not match expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Copies packed RGB pixels into an RGBA frame, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::NotRgb { len: src.len() });
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
