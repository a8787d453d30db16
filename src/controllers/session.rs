//! Single-threaded explore loop: drain commands, advance continuous zoom,
//! render when the view changed.

use crate::controllers::ports::session_presenter::{SessionFrame, SessionPresenterPort};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_view::{RenderSettings, RenderViewError, ViewRenderer};
use crate::core::explorer::command::{CommandOutcome, ExplorerCommand};
use crate::core::explorer::controller::ViewportController;
use std::collections::VecDeque;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("render failed: {0}")]
    Render(#[from] RenderViewError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Quit,
}

pub struct ExplorerSession<P: SessionPresenterPort> {
    controller: ViewportController,
    settings: RenderSettings,
    renderer: ViewRenderer,
    presenter: P,
    pending: VecDeque<ExplorerCommand>,
    auto_tick: bool,
    needs_redraw: bool,
    frames_rendered: u64,
}

impl<P: SessionPresenterPort> ExplorerSession<P> {
    /// The first [`step`](Self::step) always renders.
    pub fn new(controller: ViewportController, settings: RenderSettings, presenter: P) -> Self {
        Self {
            controller,
            settings,
            renderer: ViewRenderer::new(),
            presenter,
            pending: VecDeque::new(),
            auto_tick: true,
            needs_redraw: true,
            frames_rendered: 0,
        }
    }

    /// With auto-tick off, continuous zoom only advances on explicit
    /// [`ExplorerCommand::Tick`]s, which makes scripted runs reproducible.
    #[must_use]
    pub fn with_auto_tick(mut self, auto_tick: bool) -> Self {
        self.auto_tick = auto_tick;
        self
    }

    pub fn submit(&mut self, command: ExplorerCommand) {
        self.pending.push_back(command);
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn escape_passes(&self) -> u64 {
        self.renderer.escape_passes()
    }

    /// Re-renders the next frame with new settings. When only the colour map
    /// or shade factor changed, the last escape field is re-shaded.
    pub fn set_settings(&mut self, settings: RenderSettings) {
        if settings != self.settings {
            self.settings = settings;
            self.needs_redraw = true;
        }
    }

    /// Runs one loop iteration. Commands queued after a `Quit` stay queued.
    pub fn step(&mut self) -> Result<SessionStatus, SessionError> {
        while let Some(command) = self.pending.pop_front() {
            let report = self.controller.apply(command);

            match report.outcome {
                CommandOutcome::Quit => return Ok(SessionStatus::Quit),
                CommandOutcome::Redraw => self.needs_redraw = true,
                CommandOutcome::NoRedraw => {}
            }
        }

        if self.auto_tick && self.controller.tick().needs_redraw() {
            self.needs_redraw = true;
        }

        if self.needs_redraw {
            self.render()?;
        }

        Ok(SessionStatus::Running)
    }

    /// Applies each command as its own step.
    pub fn run_script(
        &mut self,
        commands: impl IntoIterator<Item = ExplorerCommand>,
    ) -> Result<SessionStatus, SessionError> {
        for command in commands {
            self.submit(command);
            if self.step()? == SessionStatus::Quit {
                return Ok(SessionStatus::Quit);
            }
        }

        Ok(SessionStatus::Running)
    }

    fn render(&mut self) -> Result<(), SessionError> {
        let snapshot = self.controller.snapshot();
        let start = Instant::now();
        let view = self.renderer.render(&snapshot, &self.settings, &NeverCancel)?;
        let render_duration = start.elapsed();

        self.frames_rendered += 1;
        self.needs_redraw = false;

        info!(
            frame = self.frames_rendered,
            elapsed_ms = render_duration.as_secs_f64() * 1000.0,
            members = view.field.member_count(),
            max_iterations = snapshot.max_iterations,
            escape_passes = self.renderer.escape_passes(),
            "rendered"
        );

        self.presenter.present(SessionFrame {
            sequence: self.frames_rendered,
            snapshot,
            view,
            render_duration,
        });

        Ok(())
    }
}
