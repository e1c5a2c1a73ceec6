//! Render error types

/// Errors from GPU setup and frame presentation
#[derive(Debug)]
pub enum RenderError {
    /// No GPU adapter can present to the window
    AdapterUnavailable,
    /// The adapter refused to create a device
    DeviceRequest(String),
    /// The window surface could not be created or configured
    SurfaceCreation(String),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl RenderError {
    /// Whether the frame can simply be retried after reconfiguring the surface
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Other(_))
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::AdapterUnavailable => write!(f, "No suitable GPU adapter found"),
            RenderError::DeviceRequest(msg) => write!(f, "Device request failed: {}", msg),
            RenderError::SurfaceCreation(msg) => write!(f, "Surface creation failed: {}", msg),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
