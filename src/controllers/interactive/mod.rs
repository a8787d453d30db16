//! Background rendering for the windowed front end.
//!
//! The GUI submits [`RenderRequest`]s; a worker thread renders the newest one
//! and hands the result to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod scheduler;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
pub use scheduler::{RenderScheduler, SchedulerAction};
