//! Conversion from winit input types into toolkit-neutral [`InputEvent`]s.

use crate::input::dispatcher::{InputEvent, Key};
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

#[must_use]
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::Space => Key::Space,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyZ => Key::Z,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyQ => Key::Q,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Vertical scroll amount; only the sign matters to the dispatcher.
#[must_use]
pub fn wheel_event(delta: MouseScrollDelta) -> InputEvent {
    let delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    InputEvent::Wheel { delta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn maps_pan_keys_and_arrows() {
        assert_eq!(key_from_code(KeyCode::KeyW), Key::W);
        assert_eq!(key_from_code(KeyCode::ArrowLeft), Key::ArrowLeft);
        assert_eq!(key_from_code(KeyCode::KeyD), Key::D);
    }

    #[test]
    fn unmapped_keys_become_other() {
        assert_eq!(key_from_code(KeyCode::KeyP), Key::Other);
        assert_eq!(key_from_code(KeyCode::F1), Key::Other);
    }

    #[test]
    fn line_and_pixel_deltas_keep_their_sign() {
        assert_eq!(
            wheel_event(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Wheel { delta: 1.0 }
        );
        assert_eq!(
            wheel_event(MouseScrollDelta::PixelDelta(PhysicalPosition::new(3.0, -24.0))),
            InputEvent::Wheel { delta: -24.0 }
        );
    }
}
