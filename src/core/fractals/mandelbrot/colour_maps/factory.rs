use crate::core::fractals::mandelbrot::colour_maps::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::blue_white_gradient::MandelbrotBlueWhiteGradient;
use crate::core::fractals::mandelbrot::colour_maps::fire_gradient::MandelbrotFireGradient;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_maps::shade::MandelbrotShade;

/// `shade_factor` only affects [`MandelbrotColourMapKind::Shade`].
#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKind,
    max_iterations: u32,
    shade_factor: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::Shade => {
            Box::new(MandelbrotShade::new(max_iterations, shade_factor))
        }
        MandelbrotColourMapKind::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
        MandelbrotColourMapKind::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
    }
}
