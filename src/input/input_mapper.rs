//! Input mapping from raw window events to simulation events
//!
//! Window close and Escape quit, `C` clears the grid, and primary mouse
//! presses become sand placements at the last known cursor position.

use sandfall_input::{PointerTracker, SimEvent};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps winit window events to [`SimEvent`]s
pub struct InputMapper {
    pointer: PointerTracker,
}

impl InputMapper {
    /// Create a mapper for a frame of `width × height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pointer: PointerTracker::new(width, height),
        }
    }

    /// Tell the mapper the real surface size, for cursor rescaling
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.pointer.resize(width, height);
    }

    /// Map a window event
    ///
    /// Returns `None` for events that only update internal state (cursor
    /// movement, resizes) or that the simulation ignores.
    pub fn map_window_event(&mut self, event: &WindowEvent) -> Option<SimEvent> {
        match event {
            WindowEvent::CloseRequested => Some(SimEvent::Quit),
            WindowEvent::Resized(size) => {
                self.pointer.resize(size.width, size.height);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.cursor_moved(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.pointer.button(*button, *state),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key) => Self::map_keyboard(key, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Map keyboard input to an event
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<SimEvent> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(SimEvent::Quit),
            KeyCode::KeyC => Some(SimEvent::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandfall_input::PointerButton;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, MouseButton};

    fn device() -> DeviceId {
        DeviceId::dummy()
    }

    #[test]
    fn test_close_requested_quits() {
        let mut mapper = InputMapper::new(600, 400);
        assert_eq!(
            mapper.map_window_event(&WindowEvent::CloseRequested),
            Some(SimEvent::Quit)
        );
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(SimEvent::Quit)
        );
    }

    #[test]
    fn test_c_clears() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Pressed),
            Some(SimEvent::Clear)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in [KeyCode::KeyW, KeyCode::Space, KeyCode::Enter] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Pressed), None);
        }
    }

    #[test]
    fn test_click_after_move_places() {
        let mut mapper = InputMapper::new(600, 400);
        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(120.0, 80.0),
        };
        assert_eq!(mapper.map_window_event(&moved), None);

        let click = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(
            mapper.map_window_event(&click),
            Some(SimEvent::PointerDown {
                button: PointerButton::Primary,
                x: 120,
                y: 80,
            })
        );
    }

    #[test]
    fn test_resize_rescales_cursor() {
        let mut mapper = InputMapper::new(600, 400);
        mapper.map_window_event(&WindowEvent::Resized(PhysicalSize::new(1200, 800)));
        mapper.map_window_event(&WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(300.0, 100.0),
        });
        let click = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(
            mapper.map_window_event(&click),
            Some(SimEvent::PointerDown {
                button: PointerButton::Primary,
                x: 150,
                y: 50,
            })
        );
    }
}
