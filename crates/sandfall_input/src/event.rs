//! Simulation input events

use winit::event::MouseButton;

/// Pointer button, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button / primary touch
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl PointerButton {
    /// Whether this button places sand
    #[inline]
    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(id) => PointerButton::Other(id),
        }
    }
}

/// A discrete event queued for the next simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// Stop the loop at the end of the tick
    Quit,
    /// A pointer button went down at a frame pixel position
    ///
    /// Coordinates may be negative or beyond the frame when the pointer is
    /// outside the drawable area.
    PointerDown { button: PointerButton, x: i32, y: i32 },
    /// Reset the grid to empty
    Clear,
}
