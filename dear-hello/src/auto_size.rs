//! Resizing the application window to the size of its widgets.
use crate::geometry::WindowGeometry;

/// ImGui needs one frame to lay out an auto-resizing window before its size is right.
pub const MEASURE_FRAMES: u8 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoSizer {
    frames_left: u8,
}

impl AutoSizer {
    /// `at_startup` comes from [`WindowGeometry::size_auto`].
    pub fn new(at_startup: bool) -> Self {
        Self {
            frames_left: if at_startup { MEASURE_FRAMES } else { 0 },
        }
    }

    /// Consumes a pending resize request. Returns true if this frame lays out for measuring.
    pub fn begin_frame(&mut self, geometry: &mut WindowGeometry) -> bool {
        if geometry.take_resize_request() {
            self.frames_left = MEASURE_FRAMES;
        }
        self.is_measuring()
    }

    /// Returns the size to apply once the last measuring frame is done.
    pub fn end_frame(&mut self, measured: Option<[f32; 2]>) -> Option<[f32; 2]> {
        if self.frames_left == 0 {
            return None;
        }
        self.frames_left -= 1;
        if self.frames_left == 0 { measured } else { None }
    }

    pub fn is_measuring(&self) -> bool {
        self.frames_left > 0
    }
}
