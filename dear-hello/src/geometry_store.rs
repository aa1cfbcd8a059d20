//! Saves the application window geometry on exit and restores it on the next run.
use crate::error::{HelloError, HelloResult};
use crate::geometry::{ScreenPosition, ScreenSize, WindowGeometry, WindowPositionMode, WindowSizeState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// The part of [`WindowGeometry`] that survives between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGeometry {
    pub size: ScreenSize,
    pub position: ScreenPosition,
    #[serde(default)]
    pub monitor_idx: usize,
    #[serde(default)]
    pub window_size_state: WindowSizeState,
}

impl StoredGeometry {
    /// Overrides the matching fields of `geometry`.
    ///
    /// A restored window is placed at its stored coordinates and no longer auto-sizes.
    pub fn apply_to(&self, geometry: &mut WindowGeometry) {
        geometry.size = self.size;
        geometry.position = self.position;
        geometry.position_mode = WindowPositionMode::FromCoords;
        geometry.monitor_idx = self.monitor_idx;
        geometry.window_size_state = self.window_size_state;
        geometry.size_auto = false;
    }
}

pub fn load(path: &Path) -> HelloResult<Option<StoredGeometry>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No stored window geometry at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(HelloError::geometry_store(path, e)),
    };
    let stored = toml::from_str(&content).map_err(|e| HelloError::geometry_store(path, e))?;
    Ok(Some(stored))
}

pub fn save(path: &Path, geometry: &StoredGeometry) -> HelloResult<()> {
    let content =
        toml::to_string_pretty(geometry).map_err(|e| HelloError::geometry_store(path, e))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| HelloError::geometry_store(parent, e))?;
        }
    }
    fs::write(path, content).map_err(|e| HelloError::geometry_store(path, e))?;
    info!("Saved window geometry to {}", path.display());
    Ok(())
}

/// Loads the stored geometry into `geometry`. A corrupt file is logged and ignored.
pub fn restore_into(path: &Path, geometry: &mut WindowGeometry) -> bool {
    match load(path) {
        Ok(Some(stored)) => {
            stored.apply_to(geometry);
            info!("Restored window geometry from {}", path.display());
            true
        }
        Ok(None) => false,
        Err(e) => {
            warn!("Ignoring stored window geometry: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_switches_to_explicit_coordinates() {
        let stored = StoredGeometry {
            size: [1024, 768],
            position: [10, 20],
            monitor_idx: 1,
            window_size_state: WindowSizeState::Maximized,
        };
        let mut geometry = WindowGeometry {
            size_auto: true,
            position_mode: WindowPositionMode::MonitorCenter,
            ..Default::default()
        };
        stored.apply_to(&mut geometry);

        assert_eq!(geometry.size, [1024, 768]);
        assert_eq!(geometry.position, [10, 20]);
        assert_eq!(geometry.position_mode, WindowPositionMode::FromCoords);
        assert_eq!(geometry.monitor_idx, 1);
        assert_eq!(geometry.window_size_state, WindowSizeState::Maximized);
        assert!(!geometry.size_auto);
    }

    #[test]
    fn older_files_without_optional_keys_still_parse() {
        let stored: StoredGeometry = toml::from_str("size = [640, 480]\nposition = [5, 6]\n").unwrap();
        assert_eq!(stored.monitor_idx, 0);
        assert_eq!(stored.window_size_state, WindowSizeState::Standard);
    }
}
