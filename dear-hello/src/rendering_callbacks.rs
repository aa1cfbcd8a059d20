//! Callbacks for the 3D rendering backend.
//!
//! Frame anatomy, as driven by the runner:
//!
//! ```text
//! create window               (windowing backend)
//! create ImGui context        (runner)
//! loop {
//!     poll events             (windowing backend)
//!     new_frame_3d            (rendering backend)
//!     ImGui new frame + widgets
//!     ImGui render
//!     frame_3d_clear_color    (rendering backend)
//!     render_draw_data_to_3d  (rendering backend)
//!     swap_buffers            (rendering backend)
//! }
//! shutdown_3d                 (rendering backend)
//! ```
//!
//! A backend replaces every mandatory slot. The defaults report a
//! [`HelloError::RenderingCallbackUnset`] so a backend that forgets one fails loudly.
use crate::error::{HelloError, HelloResult};
use crate::geometry::ScreenSize;
use dear_imgui_rs::render::DrawData;
use tracing::error;

/// RGB pixels of a rendered frame, row major, 3 bytes per pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl ImageBuffer {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.rgb.is_empty()
    }
}

pub type FrameFunction = Box<dyn FnMut() -> HelloResult<()>>;
pub type ClearColorFunction = Box<dyn FnMut([f32; 4]) -> HelloResult<()>>;
pub type DrawDataFunction = Box<dyn FnMut(&DrawData) -> HelloResult<()>>;

pub struct RenderingCallbacks {
    pub new_frame_3d: FrameFunction,
    pub frame_3d_clear_color: ClearColorFunction,
    pub render_draw_data_to_3d: DrawDataFunction,
    pub swap_buffers: FrameFunction,
    pub shutdown_3d: FrameFunction,
    /// Optional: returns an empty buffer by default.
    pub screenshot_rgb_3d: Box<dyn FnMut() -> ImageBuffer>,
    /// Optional: unset by default.
    pub get_framebuffer_size: Option<Box<dyn FnMut() -> ScreenSize>>,
}

fn unset(name: &'static str) -> FrameFunction {
    Box::new(move || Err(report_unset(name)))
}

fn report_unset(name: &'static str) -> HelloError {
    error!("Rendering callback `{name}` called but never set by the backend");
    HelloError::RenderingCallbackUnset(name)
}

impl Default for RenderingCallbacks {
    fn default() -> Self {
        Self {
            new_frame_3d: unset("new_frame_3d"),
            frame_3d_clear_color: Box::new(|_| Err(report_unset("frame_3d_clear_color"))),
            render_draw_data_to_3d: Box::new(|_| Err(report_unset("render_draw_data_to_3d"))),
            swap_buffers: unset("swap_buffers"),
            shutdown_3d: unset("shutdown_3d"),
            screenshot_rgb_3d: Box::new(ImageBuffer::default),
            get_framebuffer_size: None,
        }
    }
}

impl RenderingCallbacks {
    pub fn screenshot(&mut self) -> ImageBuffer {
        (self.screenshot_rgb_3d)()
    }

    pub fn framebuffer_size(&mut self) -> Option<ScreenSize> {
        self.get_framebuffer_size.as_mut().map(|f| f())
    }
}
