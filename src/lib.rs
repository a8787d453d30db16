//! Interactive Mandelbrot set explorer.
//!
//! The `core` module holds the viewport state machine and the render
//! pipeline; `controllers` drive it headlessly or from a background worker;
//! the `gui` feature adds a winit + pixels + egui front end.

pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use controllers::cli::explore::{CliExploreController, CliExploreError};
pub use controllers::session::{ExplorerSession, SessionStatus};
pub use core::actions::render_view::{RenderSettings, ViewRenderer, render_view};
pub use core::explorer::command::{ExplorerCommand, parse_script};
pub use core::explorer::{ExplorerConfig, ViewportController};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
