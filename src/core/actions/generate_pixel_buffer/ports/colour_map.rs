use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

/// Turns one escape-field value into a colour.
pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl<T, M: ColourMap<T> + ?Sized> ColourMap<T> for Box<M> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
