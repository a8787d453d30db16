use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// Smooth polynomial gradient over `n / budget`.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotBlueWhiteGradient {
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

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let u = 1.0 - t;

        Ok(Colour {
            r: (9.0 * u * t * t * t * 255.0) as u8,
            g: (15.0 * u * u * t * t * 255.0) as u8,
            b: (8.5 * u * u * u * t * 255.0) as u8,
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
