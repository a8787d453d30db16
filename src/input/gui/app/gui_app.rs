use crate::controllers::interactive::{
    InteractiveController, RenderRequest, RenderScheduler, SchedulerAction,
};
use crate::core::actions::render_escape_field::Execution;
use crate::core::actions::render_view::RenderSettings;
use crate::core::explorer::command::{CommandOutcome, CommandReport, ExplorerCommand};
use crate::core::explorer::controller::ViewportController;
use crate::core::fractals::mandelbrot::algorithm::IterationStrategy;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::input::dispatcher::{InputDispatcher, InputEvent};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::keys::{key_from_code, wheel_event};
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::sync::Arc;
use tracing::debug;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

/// UI-thread state of the windowed explorer.
///
/// Owns the viewport controller and translates window events into commands.
/// Render requests go to the background worker through the scheduler; frames
/// come back through the presenter.
pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    scheduler: RenderScheduler,
    viewport_controller: ViewportController,
    dispatcher: InputDispatcher,
    settings: RenderSettings,
    last_requested: Option<RenderRequest>,
    last_action: String,
    quit_requested: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        viewport_controller: ViewportController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let settings = viewport_controller.config().render_settings();

        Self {
            scale_factor,
            presenter,
            controller,
            scheduler: RenderScheduler::new(),
            viewport_controller,
            dispatcher: InputDispatcher::new(),
            settings,
            last_requested: None,
            last_action: String::from("start"),
            quit_requested: false,
            egui_ctx,
            egui_state,
        }
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize_surface(width, height)
    }

    /// Forwards the event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Applies explorer input carried by `event`. Returns true when the
    /// window should be redrawn.
    pub fn handle_explorer_input(&mut self, event: &WindowEvent) -> bool {
        let input = match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => InputEvent::KeyPressed(key_from_code(*code)),
            WindowEvent::MouseWheel { delta, .. } => wheel_event(*delta),
            WindowEvent::CloseRequested => InputEvent::CloseRequested,
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.presenter.window_to_buffer(position.x, position.y);
                InputEvent::CursorMoved { x, y }
            }
            _ => return false,
        };

        match self.dispatcher.dispatch(input) {
            Some(command) => self.apply_command(command),
            None => false,
        }
    }

    /// Runs one egui frame, then advances continuous zoom and submits a
    /// render request if the view or settings changed.
    pub fn update(&mut self, window: &Window) -> egui::FullOutput {
        let output = self.update_ui(window);
        self.advance_continuous_zoom();
        self.submit_render_request_if_needed();
        output
    }

    fn apply_command(&mut self, command: ExplorerCommand) -> bool {
        let report = self.viewport_controller.apply(command);
        self.record_action(command, &report);

        match report.outcome {
            CommandOutcome::Quit => {
                self.quit_requested = true;
                false
            }
            // mode changes still refresh the status panel
            CommandOutcome::NoRedraw => !matches!(command, ExplorerCommand::Unrecognized),
            CommandOutcome::Redraw => true,
        }
    }

    fn record_action(&mut self, command: ExplorerCommand, report: &CommandReport) {
        if matches!(command, ExplorerCommand::Tick | ExplorerCommand::Unrecognized)
            && report.refusal.is_none()
        {
            return;
        }

        self.last_action = match report.refusal {
            Some(refusal) if report.continuous_zoom_stopped => {
                format!("continuous zoom stopped: {refusal}")
            }
            Some(refusal) => format!("{command} refused: {refusal}"),
            None => command.to_string(),
        };
    }

    /// One animation step per presented frame: tick only once the worker has
    /// caught up with everything submitted so far.
    fn advance_continuous_zoom(&mut self) {
        if !self.viewport_controller.is_continuous_zooming() {
            return;
        }

        let last_completed = self.controller.last_completed_generation();
        if !self.scheduler.is_idle(last_completed) || self.scheduler.has_pending() {
            return;
        }

        self.apply_command(ExplorerCommand::Tick);
    }

    fn submit_render_request_if_needed(&mut self) {
        let desired = RenderRequest {
            snapshot: self.viewport_controller.snapshot(),
            settings: self.settings,
        };
        let last_completed = self.controller.last_completed_generation();
        let controller = &self.controller;
        let submit = |request: Arc<RenderRequest>| controller.submit_request(request);

        let action = if self.last_requested == Some(desired) {
            self.scheduler.poll(last_completed, submit)
        } else {
            self.last_requested = Some(desired);
            self.scheduler.update(
                Arc::new(desired),
                self.viewport_controller.is_continuous_zooming(),
                last_completed,
                submit,
            )
        };

        if let SchedulerAction::Submitted { generation } = action {
            debug!(generation, "render request submitted");
        }
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut clicked: Option<ExplorerCommand> = None;

        let viewport = self.viewport_controller.viewport();
        let max_iterations = self.viewport_controller.max_iterations();
        let continuous = self.viewport_controller.is_continuous_zooming();
        let status = self.presenter.status().clone();
        let settings = &mut self.settings;
        let last_action = &self.last_action;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        viewport.real_min(),
                        viewport.real_max()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        viewport.imag_min(),
                        viewport.imag_max()
                    ));
                    ui.label(format!("Span: {:e}", viewport.height()));
                    ui.label(format!("Iteration budget: {max_iterations}"));
                    ui.label(format!(
                        "Mode: {}",
                        if continuous { "continuous zoom" } else { "manual" }
                    ));
                    ui.label(format!("Last action: {last_action}"));

                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(settings.colour_map.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKind::ALL {
                                    ui.selectable_value(
                                        &mut settings.colour_map,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    if settings.colour_map == MandelbrotColourMapKind::Shade {
                        ui.horizontal(|ui| {
                            ui.label("Shade factor:");
                            ui.add(egui::Slider::new(&mut settings.shade_factor, 1..=50));
                        });
                    }

                    ui.horizontal(|ui| {
                        ui.label("Iteration:");
                        ui.selectable_value(
                            &mut settings.strategy,
                            IterationStrategy::Incremental,
                            "incremental",
                        );
                        ui.selectable_value(&mut settings.strategy, IterationStrategy::Naive, "naive");
                    });

                    ui.horizontal(|ui| {
                        ui.label("Execution:");
                        ui.selectable_value(&mut settings.execution, Execution::Parallel, "parallel");
                        ui.selectable_value(&mut settings.execution, Execution::Serial, "serial");
                    });

                    ui.separator();

                    ui.horizontal(|ui| {
                        if ui.button("Reset view").clicked() {
                            clicked = Some(ExplorerCommand::Reset);
                        }

                        let (label, command) = if continuous {
                            ("Stop zoom", ExplorerCommand::StopContinuousZoom)
                        } else {
                            ("Continuous zoom", ExplorerCommand::StartContinuousZoom)
                        };
                        if ui.button(label).clicked() {
                            clicked = Some(command);
                        }
                    });

                    if let Some(render_duration) = status.render_duration {
                        ui.label(format!(
                            "Last render: {} ms (generation {})",
                            render_duration.as_millis(),
                            status.presented_generation
                        ));
                    }
                    if let Some(message) = &status.error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        if let Some(command) = clicked {
            self.apply_command(command);
        }

        output
    }
}
