//! Windowed front end for interactive exploration.
//!
//! winit owns the window and event loop, pixels scales the rendered buffer
//! onto the surface, and egui draws the status panel on top.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
pub mod keys;
