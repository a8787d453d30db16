use crate::controllers::interactive::InteractiveController;
use crate::core::explorer::config::ExplorerConfig;
use crate::core::explorer::controller::ViewportController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use std::marker::PhantomData;
use tracing::{error, info};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

/// Opens the explorer window and runs the event loop until it closes.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self, config: ExplorerConfig) -> Result<(), GuiError> {
        let viewport_controller = ViewportController::new(config)?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a surface that outlives the event loop
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(config.width, config.height))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P =
            self.presenter_factory
                .build(window, config.width, config.height, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, viewport_controller);
        let mut redraw_pending = true;
        let mut failure: Option<GuiError> = None;

        info!(width = config.width, height = config.height, "window opened");

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.handle_explorer_input(event);
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!(error = %err, "render failed");
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!(error = %err, "resize failed");
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!(error = %err, "resize failed");
                            failure = Some(err);
                            app.controller.shutdown();
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    // the panel has focus, so keys and wheel belong to egui
                    _ if egui_consumed => {}
                    _ => {
                        if app.handle_explorer_input(event) {
                            redraw_pending = true;
                        }
                        if app.quit_requested() {
                            app.controller.shutdown();
                            elwt.exit();
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
