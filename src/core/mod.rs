pub mod actions;
pub mod data;
pub mod explorer;
pub mod fractals;
pub mod util;
