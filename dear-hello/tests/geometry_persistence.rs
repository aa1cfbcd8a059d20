use dear_hello::geometry_store::{self, StoredGeometry};
use dear_hello::{IniSettings, WindowGeometry, WindowPositionMode, WindowSizeState};
use std::fs;

fn stored() -> StoredGeometry {
    StoredGeometry {
        size: [1280, 720],
        position: [100, 50],
        monitor_idx: 1,
        window_size_state: WindowSizeState::Maximized,
    }
}

#[test]
fn saved_geometry_is_restored_on_next_run() {
    let dir = tempfile::tempdir().unwrap();
    let ini = IniSettings {
        folder: dir.path().to_path_buf(),
        filename: None,
    };
    let path = ini.app_window_geometry_path("Geometry Test");
    assert_eq!(path, dir.path().join("Geometry_Test_app_window.toml"));

    geometry_store::save(&path, &stored()).unwrap();
    assert_eq!(geometry_store::load(&path).unwrap(), Some(stored()));

    let mut geometry = WindowGeometry {
        size_auto: true,
        ..Default::default()
    };
    assert!(geometry_store::restore_into(&path, &mut geometry));
    assert_eq!(geometry.size, [1280, 720]);
    assert_eq!(geometry.position, [100, 50]);
    assert_eq!(geometry.position_mode, WindowPositionMode::FromCoords);
    assert_eq!(geometry.monitor_idx, 1);
    assert_eq!(geometry.window_size_state, WindowSizeState::Maximized);
    assert!(!geometry.size_auto);
}

#[test]
fn save_creates_missing_folders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cfg").join("app_app_window.toml");
    geometry_store::save(&path, &stored()).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_file_leaves_geometry_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent_app_window.toml");
    assert_eq!(geometry_store::load(&path).unwrap(), None);

    let mut geometry = WindowGeometry::default();
    assert!(!geometry_store::restore_into(&path, &mut geometry));
    assert_eq!(geometry, WindowGeometry::default());
}

#[test]
fn corrupt_file_is_reported_and_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_app_window.toml");
    fs::write(&path, "size = \"not an array\"").unwrap();

    let err = geometry_store::load(&path).unwrap_err();
    assert!(err.to_string().contains("bad_app_window.toml"));

    let mut geometry = WindowGeometry::default();
    assert!(!geometry_store::restore_into(&path, &mut geometry));
    assert_eq!(geometry, WindowGeometry::default());
}
