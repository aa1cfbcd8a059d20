use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelloError {
    #[error("WGPU surface lost")]
    SurfaceLost,
    #[error("WGPU surface outdated")]
    SurfaceOutdated,
    #[error("WGPU surface timeout")]
    SurfaceTimeout,
    #[error("WGPU error: {0}")]
    Wgpu(#[from] wgpu::SurfaceError),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation error: {0}")]
    WindowCreation(String),
    #[error("Renderer error: {0}")]
    Renderer(String),
    #[error("ImGui error: {0}")]
    ImGui(String),
    #[error("Rendering callback `{0}` was never wired by a backend")]
    RenderingCallbackUnset(&'static str),
    #[error("Window geometry store error ({}): {message}", path.display())]
    GeometryStore { path: PathBuf, message: String },
    #[error("Generic error: {0}")]
    Generic(String),
}

impl HelloError {
    /// Surface errors after which the frame is dropped and rendering continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HelloError::SurfaceLost | HelloError::SurfaceOutdated | HelloError::SurfaceTimeout
        )
    }

    pub(crate) fn geometry_store(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        HelloError::GeometryStore {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type HelloResult<T> = Result<T, HelloError>;
