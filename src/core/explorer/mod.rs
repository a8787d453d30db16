pub mod budget;
pub mod command;
pub mod config;
pub mod controller;
pub mod snapshot;

pub use command::{CommandOutcome, CommandReport, ExplorerCommand, PanDirection, ZoomRefusal};
pub use config::{ExplorerConfig, ExplorerConfigError};
pub use controller::ViewportController;
pub use snapshot::ViewSnapshot;
