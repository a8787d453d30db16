use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::input::gui::errors::GuiError;
use egui::Context as EguiContext;
use std::sync::Arc;
use std::time::Duration;

/// What the presenter last put on screen, for the status panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterStatus {
    pub presented_generation: u64,
    pub render_duration: Option<Duration>,
    pub error_message: Option<String>,
}

pub trait GuiPresenterPort {
    /// Draws the newest frame (if any) with the egui overlay on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    /// Resizes the window surface. The frame buffer keeps the view's size.
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    /// Maps a physical window position onto frame buffer pixels, clamped to the buffer.
    fn window_to_buffer(&self, x: f64, y: f64) -> (f64, f64);
    fn status(&self) -> &PresenterStatus;
}
