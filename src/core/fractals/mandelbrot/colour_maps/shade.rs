use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

pub const DEFAULT_SHADE_FACTOR: u32 = 10;

/// Red-leaning shade: escaped pixels get `(n·f·5, n·f, n·f)` clamped to 255,
/// members are black. Brightness never decreases with the count.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotShade {
    max_iterations: u32,
    factor: u32,
}

fn channel(iterations: u32, factor: u32, weight: u32) -> u8 {
    let value = iterations.saturating_mul(factor).saturating_mul(weight);
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl ColourMap<u32> for MandelbrotShade {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        Ok(Colour {
            r: channel(iterations, self.factor, 5),
            g: channel(iterations, self.factor, 1),
            b: channel(iterations, self.factor, 1),
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotShade {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::Shade
    }
}

impl MandelbrotShade {
    #[must_use]
    pub fn new(max_iterations: u32, factor: u32) -> Self {
        Self {
            max_iterations,
            factor,
        }
    }

    #[must_use]
    pub fn factor(&self) -> u32 {
        self.factor
    }
}
