//! Computes where and how the application window should be created.
//!
//! Planning is kept apart from winit so it can run (and be tested) without a
//! display; the runner turns a [`WindowPlan`] into window attributes.
use crate::app_window_params::AppWindowParams;
use crate::geometry::{FullScreenMode, WindowPositionMode, WindowSizeState};
use tracing::warn;

/// A monitor as seen before the window exists, in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorInfo {
    pub position: [i32; 2],
    pub size: [u32; 2],
    pub scale_factor: f64,
}

impl Default for MonitorInfo {
    fn default() -> Self {
        Self {
            position: [0, 0],
            size: [1920, 1080],
            scale_factor: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenPlan {
    None,
    /// Exclusive full screen with the video mode closest to `size`.
    Exclusive { monitor: usize, size: [u32; 2] },
    /// Borderless full screen at the desktop resolution.
    Borderless { monitor: usize },
    /// Maximized window covering the monitor.
    WorkArea { monitor: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowPlan {
    pub title: String,
    /// Physical pixels.
    pub inner_size: [u32; 2],
    /// Physical pixels; `None` lets the OS decide.
    pub position: Option<[i32; 2]>,
    pub fullscreen: FullscreenPlan,
    pub size_state: WindowSizeState,
    pub resizable: bool,
    pub visible: bool,
    pub decorations: bool,
    /// Index into the monitor list the plan was computed for.
    pub monitor: usize,
}

/// Plans the window for `params` on the given monitors.
///
/// `force_full_screen` is set on mobile targets where windows always cover the screen.
pub fn plan_window(
    params: &AppWindowParams,
    monitors: &[MonitorInfo],
    force_full_screen: bool,
) -> WindowPlan {
    let geometry = &params.window_geometry;

    let monitor_idx = if geometry.monitor_idx < monitors.len() || monitors.is_empty() {
        geometry.monitor_idx
    } else {
        warn!(
            "monitor_idx {} out of range ({} monitors), using monitor 0",
            geometry.monitor_idx,
            monitors.len()
        );
        0
    };
    let monitor = monitors.get(monitor_idx).copied();
    let monitor_idx = if monitor.is_some() { monitor_idx } else { 0 };
    let scale = monitor.map_or(1.0, |m| m.scale_factor);

    let inner_size = geometry.physical_size(scale);

    let mode = if force_full_screen {
        FullScreenMode::FullScreenDesktopResolution
    } else {
        geometry.full_screen_mode
    };
    let fullscreen = match mode {
        FullScreenMode::NoFullScreen => FullscreenPlan::None,
        FullScreenMode::FullScreen => FullscreenPlan::Exclusive {
            monitor: monitor_idx,
            size: inner_size,
        },
        FullScreenMode::FullScreenDesktopResolution => FullscreenPlan::Borderless {
            monitor: monitor_idx,
        },
        FullScreenMode::FullMonitorWorkArea => FullscreenPlan::WorkArea {
            monitor: monitor_idx,
        },
    };

    let position = match fullscreen {
        FullscreenPlan::WorkArea { .. } => monitor.map(|m| m.position),
        FullscreenPlan::Exclusive { .. } | FullscreenPlan::Borderless { .. } => None,
        FullscreenPlan::None => match geometry.position_mode {
            WindowPositionMode::OsDefault => None,
            WindowPositionMode::FromCoords => Some(geometry.position),
            WindowPositionMode::MonitorCenter => {
                monitor.map(|m| centered_position(m.position, m.size, inner_size))
            }
        },
    };

    let (inner_size, size_state) = match fullscreen {
        FullscreenPlan::WorkArea { .. } => (
            monitor.map_or(inner_size, |m| m.size),
            WindowSizeState::Maximized,
        ),
        _ => (inner_size, geometry.window_size_state),
    };

    WindowPlan {
        title: params.window_title.clone(),
        inner_size,
        position,
        fullscreen,
        size_state,
        resizable: params.resizable,
        visible: !params.hidden || mode.is_full_screen(),
        decorations: !params.borderless,
        monitor: monitor_idx,
    }
}

/// Top-left corner that centers a window of `window_size` on a monitor.
/// Windows larger than the monitor are pinned to the monitor origin.
pub fn centered_position(
    monitor_pos: [i32; 2],
    monitor_size: [u32; 2],
    window_size: [u32; 2],
) -> [i32; 2] {
    let axis = |pos: i32, avail: u32, wanted: u32| -> i32 {
        pos + (avail.saturating_sub(wanted) / 2) as i32
    };
    [
        axis(monitor_pos[0], monitor_size[0], window_size[0]),
        axis(monitor_pos[1], monitor_size[1], window_size[1]),
    ]
}

/// Index of the video mode whose size is closest to `wanted`.
/// On equal distance the earlier mode wins, so callers list preferred refresh rates first.
pub fn closest_video_mode(modes: &[[u32; 2]], wanted: [u32; 2]) -> Option<usize> {
    modes
        .iter()
        .enumerate()
        .min_by_key(|(_, m)| {
            let dx = u128::from(m[0].abs_diff(wanted[0]));
            let dy = u128::from(m[1].abs_diff(wanted[1]));
            dx * dx + dy * dy
        })
        .map(|(i, _)| i)
}
