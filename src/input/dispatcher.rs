//! Translates raw input events into explorer commands.
//!
//! Window toolkits convert their own key codes into [`Key`] so the mapping
//! below can be tested without a display.

use crate::core::explorer::command::{ExplorerCommand, PanDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    C,
    Z,
    X,
    R,
    Q,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    /// Positive deltas scroll up.
    Wheel { delta: f64 },
    CursorMoved { x: f64, y: f64 },
    CloseRequested,
}

/// Tracks the last cursor position so cursor-anchored commands can carry it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputDispatcher {
    cursor: (f64, f64),
}

impl InputDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Returns `None` for events that only update dispatcher state.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<ExplorerCommand> {
        let (x, y) = self.cursor;

        let command = match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
                return None;
            }
            InputEvent::CloseRequested => ExplorerCommand::Quit,
            InputEvent::Wheel { delta } if delta > 0.0 => ExplorerCommand::ZoomIn { x, y },
            InputEvent::Wheel { delta } if delta < 0.0 => ExplorerCommand::ZoomOut { x, y },
            InputEvent::Wheel { .. } => ExplorerCommand::Unrecognized,
            InputEvent::KeyPressed(key) => match key {
                Key::W | Key::ArrowUp => ExplorerCommand::Pan(PanDirection::Up),
                Key::S | Key::ArrowDown => ExplorerCommand::Pan(PanDirection::Down),
                Key::A | Key::ArrowLeft => ExplorerCommand::Pan(PanDirection::Left),
                Key::D | Key::ArrowRight => ExplorerCommand::Pan(PanDirection::Right),
                Key::Space => ExplorerCommand::ZoomIn { x, y },
                Key::C => ExplorerCommand::Recenter { x, y },
                Key::Z => ExplorerCommand::StartContinuousZoom,
                Key::X => ExplorerCommand::StopContinuousZoom,
                Key::R => ExplorerCommand::Reset,
                Key::Q | Key::Escape => ExplorerCommand::Quit,
                Key::Other => ExplorerCommand::Unrecognized,
            },
        };

        Some(command)
    }
}
