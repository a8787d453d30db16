pub mod blue_white_gradient;
pub mod factory;
pub mod fire_gradient;
pub mod kinds;
pub mod shade;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use kinds::MandelbrotColourMapKind;

pub trait MandelbrotColourMap: ColourMap<u32> {
    fn kind(&self) -> MandelbrotColourMapKind;
}
