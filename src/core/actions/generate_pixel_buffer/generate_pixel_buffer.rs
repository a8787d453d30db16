use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours a row-major field of values into an RGB frame, polling `cancel`
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
///
/// The input is borrowed so the same field can be re-shaded with a different
/// map without recomputing it.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken,
{
    if input.len() as u64 != pixel_rect.size() {
        return Err(PixelBufferError::BoundsMismatch {
            pixel_rect_size: pixel_rect.size() as usize * BYTES_PER_PIXEL,
            buffer_size: input.len() * BYTES_PER_PIXEL,
        }
        .into());
    }

    let mut buffer = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, &value) in input.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        let colour = mapper.map(value)?;
        buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
