//! Application window geometry: size, position, monitor and full screen modes.
//!
//! A [`WindowGeometry`] is read once when the OS window is created. The only
//! field the runner honours during execution is
//! [`WindowGeometry::resize_app_window_at_next_frame`], a one-shot request that
//! is cleared as soon as the next frame consumes it.
use serde::{Deserialize, Serialize};

/// Window size, in the unit given by [`WindowSizeMeasureMode`].
pub type ScreenSize = [i32; 2];
/// Window position, in screen coordinates.
pub type ScreenPosition = [i32; 2];

pub const DEFAULT_WINDOW_SIZE: ScreenSize = [800, 600];
pub const DEFAULT_SCREEN_POSITION: ScreenPosition = [40, 40];

/// Ratio between a monitor's DPI and this reference gives the scale
/// applied by [`WindowSizeMeasureMode::RelativeTo96Ppi`].
pub const REFERENCE_PPI: f64 = 96.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullScreenMode {
    #[default]
    NoFullScreen,
    /// Full screen with the video mode closest to the requested size
    FullScreen,
    /// Full screen with the current desktop mode and resolution
    FullScreenDesktopResolution,
    /// Fake full screen: maximized window on the selected monitor
    FullMonitorWorkArea,
}

impl FullScreenMode {
    pub fn is_full_screen(self) -> bool {
        self != FullScreenMode::NoFullScreen
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSizeState {
    #[default]
    Standard,
    Minimized,
    Maximized,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPositionMode {
    #[default]
    OsDefault,
    MonitorCenter,
    FromCoords,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowSizeMeasureMode {
    /// Sizes are given in screen coordinates (physical pixels as reported by the OS).
    ScreenCoords,
    /// Sizes are density independent: 800x600 stays 800x600 on a 96 PPI
    /// monitor and becomes 1600x1200 on a 192 PPI monitor.
    #[default]
    RelativeTo96Ppi,
}

impl WindowSizeMeasureMode {
    /// Factor converting a requested size into screen coordinates.
    ///
    /// `monitor_scale` is the monitor DPI divided by [`REFERENCE_PPI`], which is
    /// what winit reports as a monitor scale factor.
    pub fn scale_factor(self, monitor_scale: f64) -> f64 {
        match self {
            WindowSizeMeasureMode::ScreenCoords => 1.0,
            WindowSizeMeasureMode::RelativeTo96Ppi if monitor_scale > 0.0 => monitor_scale,
            WindowSizeMeasureMode::RelativeTo96Ppi => 1.0,
        }
    }

    /// Inverse of [`Self::scale_factor`], used when reading a live window size back.
    pub fn from_screen_coords(self, size: [u32; 2], monitor_scale: f64) -> ScreenSize {
        let scale = self.scale_factor(monitor_scale);
        [
            (size[0] as f64 / scale).round() as i32,
            (size[1] as f64 / scale).round() as i32,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowGeometry {
    /// Used if `full_screen_mode == NoFullScreen` and `size_auto == false`
    pub size: ScreenSize,
    /// Adapt the window size to the widgets presented during the first frame.
    /// The window size may therefore differ between the first and second frames.
    pub size_auto: bool,
    pub full_screen_mode: FullScreenMode,
    pub position_mode: WindowPositionMode,
    /// Used if `position_mode == FromCoords`
    pub position: ScreenPosition,
    /// Used if `position_mode == MonitorCenter` or with any full screen mode
    pub monitor_idx: usize,
    pub window_size_state: WindowSizeState,
    pub window_size_measure_mode: WindowSizeMeasureMode,
    /// Resize the window to its content on the next displayed frame.
    /// Cleared by the runner once acted upon; use `size_auto` at startup.
    pub resize_app_window_at_next_frame: bool,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            size_auto: false,
            full_screen_mode: FullScreenMode::NoFullScreen,
            position_mode: WindowPositionMode::OsDefault,
            position: DEFAULT_SCREEN_POSITION,
            monitor_idx: 0,
            window_size_state: WindowSizeState::Standard,
            window_size_measure_mode: WindowSizeMeasureMode::RelativeTo96Ppi,
            resize_app_window_at_next_frame: false,
        }
    }
}

impl WindowGeometry {
    /// Returns the pending resize request and clears it.
    pub fn take_resize_request(&mut self) -> bool {
        std::mem::take(&mut self.resize_app_window_at_next_frame)
    }

    /// Requested size converted to screen coordinates on a monitor with the given scale.
    pub fn physical_size(&self, monitor_scale: f64) -> [u32; 2] {
        scale_size(
            self.size,
            self.window_size_measure_mode.scale_factor(monitor_scale),
        )
    }
}

pub(crate) fn scale_size(size: ScreenSize, scale: f64) -> [u32; 2] {
    [
        (size[0].max(1) as f64 * scale).round() as u32,
        (size[1].max(1) as f64 * scale).round() as u32,
    ]
}
