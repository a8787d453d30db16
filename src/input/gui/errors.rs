use crate::core::explorer::config::ExplorerConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("invalid explorer configuration: {0}")]
    Config(#[from] ExplorerConfigError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize pixels surface: {0}")]
    Resize(#[from] pixels::TextureError),
}
