use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// Black → red → orange → yellow → white in four equal bands.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotFireGradient {
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
        let band = |start: f64| (t - start) / 0.25;

        let (r, g, b) = if t < 0.25 {
            ((band(0.0) * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, (band(0.25) * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + band(0.5) * 90.0) as u8, 0)
        } else {
            (255, 255, (band(0.75) * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(100).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_quarter_is_red() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(25).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_map_half_is_orange() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(50).unwrap(), Colour { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_map_three_quarters_is_yellow() {
        let mapper = MandelbrotFireGradient::new(100);

        assert_eq!(mapper.map(75).unwrap(), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_map_near_max_is_near_white() {
        let mapper = MandelbrotFireGradient::new(100);
        let colour = mapper.map(99).unwrap();

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
    }
}
