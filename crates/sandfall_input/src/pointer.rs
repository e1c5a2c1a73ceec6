//! Pointer position tracking
//!
//! winit reports button presses without a position, so the last cursor
//! position is remembered and attached to each press. Positions arrive in
//! surface pixels and are rescaled to frame pixels, which differ when the
//! platform applies a scale factor to the window.

use winit::event::{ElementState, MouseButton};

use crate::{PointerButton, SimEvent};

/// Remembers the cursor and turns button presses into [`SimEvent`]s
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Option<(f64, f64)>,
    surface_size: (u32, u32),
    frame_size: (u32, u32),
}

impl PointerTracker {
    /// Create a tracker for a frame of `width × height` pixels
    ///
    /// The surface is assumed to match the frame until [`resize`](Self::resize)
    /// says otherwise.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: None,
            surface_size: (width, height),
            frame_size: (width, height),
        }
    }

    /// Record the current surface size in physical pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_size = (width, height);
    }

    /// Record a cursor move in surface pixels
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    /// Forget the cursor once it leaves the window
    pub fn cursor_left(&mut self) {
        self.position = None;
    }

    /// Current cursor position in frame pixels
    pub fn position(&self) -> Option<(i32, i32)> {
        let (x, y) = self.position?;
        Some((
            rescale(x, self.surface_size.0, self.frame_size.0),
            rescale(y, self.surface_size.1, self.frame_size.1),
        ))
    }

    /// Translate a mouse button change into an event
    ///
    /// Only presses produce events. A press with no known cursor position is
    /// dropped.
    pub fn button(&self, button: MouseButton, state: ElementState) -> Option<SimEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        let Some((x, y)) = self.position() else {
            log::debug!("Ignoring {:?} press with no cursor position", button);
            return None;
        };
        Some(SimEvent::PointerDown {
            button: PointerButton::from(button),
            x,
            y,
        })
    }
}

fn rescale(value: f64, surface: u32, frame: u32) -> i32 {
    if surface == 0 || surface == frame {
        return value.floor() as i32;
    }
    (value * frame as f64 / surface as f64).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_without_position_is_dropped() {
        let tracker = PointerTracker::new(600, 400);
        assert_eq!(tracker.button(MouseButton::Left, ElementState::Pressed), None);
    }

    #[test]
    fn test_press_uses_last_position() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.cursor_moved(10.0, 20.0);
        tracker.cursor_moved(41.7, 13.2);
        assert_eq!(
            tracker.button(MouseButton::Left, ElementState::Pressed),
            Some(SimEvent::PointerDown {
                button: PointerButton::Primary,
                x: 41,
                y: 13,
            })
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.cursor_moved(5.0, 5.0);
        assert_eq!(tracker.button(MouseButton::Left, ElementState::Released), None);
    }

    #[test]
    fn test_cursor_left_clears_position() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.cursor_moved(5.0, 5.0);
        tracker.cursor_left();
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_hidpi_surface_rescaled_to_frame() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.resize(1200, 800);
        tracker.cursor_moved(1199.0, 799.0);
        assert_eq!(tracker.position(), Some((599, 399)));
    }

    #[test]
    fn test_negative_positions_floor() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.cursor_moved(-0.5, -3.0);
        assert_eq!(tracker.position(), Some((-1, -3)));
    }

    #[test]
    fn test_zero_surface_does_not_divide() {
        let mut tracker = PointerTracker::new(600, 400);
        tracker.resize(0, 0);
        tracker.cursor_moved(12.0, 8.0);
        assert_eq!(tracker.position(), Some((12, 8)));
    }
}
