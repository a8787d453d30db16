use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use winit::{event_loop::EventLoopProxy, window::Window};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    /// Builds a presenter drawing a `buffer_width × buffer_height` frame into `window`.
    fn build(
        &self,
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<T, GuiError>;
}
