use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::{event_loop::EventLoopProxy, window::Window};

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, buffer_width, buffer_height, event_loop_proxy)
    }
}
