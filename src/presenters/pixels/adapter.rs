use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use winit::event_loop::EventLoopProxy;

/// Hand-off point between the render worker and the UI thread.
///
/// Only the most recent event is kept; an older one that the UI has not
/// picked up yet is simply replaced.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            debug!("event loop closed before frame could be presented");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
