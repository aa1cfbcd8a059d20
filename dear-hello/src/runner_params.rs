//! Parameters consumed by the runner, and the per-frame view handed to GUI callbacks.
use crate::app_window_params::AppWindowParams;
use crate::callbacks::RunnerCallbacks;
use dear_imgui_rs::DockFlags;
use dear_imgui_rs::WindowFlags;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which window the runner provides behind the application widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefaultImGuiWindowType {
    /// A window covering the whole viewport; `show_gui` draws inside it.
    #[default]
    ProvideFullScreenWindow,
    /// A full screen dockspace; `show_gui` creates its own dockable windows.
    ProvideFullScreenDockSpace,
    /// Nothing; `show_gui` manages every window.
    NoDefaultWindow,
}

/// Parameters of the default ImGui window, menu bar and status bar
pub struct ImGuiWindowParams {
    pub default_imgui_window_type: DefaultImGuiWindowType,
    /// Clear color of the 3D surface.
    pub background_color: [f32; 4],
    pub show_menu_bar: bool,
    /// Show the application menu (window title, quit item).
    pub show_menu_app: bool,
    /// Show the View menu (status bar and FPS toggles).
    pub show_menu_view: bool,
    pub show_status_bar: bool,
    pub show_status_fps: bool,
    /// Title of the application menu; empty uses the window title.
    pub menu_app_title: String,
    /// Flags of the dockspace created by `ProvideFullScreenDockSpace`
    pub dockspace_flags: DockFlags,
    /// Flags of the host window of the default window
    pub host_window_flags: WindowFlags,
    /// Host window name (persisted in the ini file)
    pub host_window_name: &'static str,
}

impl Default for ImGuiWindowParams {
    fn default() -> Self {
        Self {
            default_imgui_window_type: DefaultImGuiWindowType::ProvideFullScreenWindow,
            background_color: [0.45, 0.55, 0.60, 1.00],
            show_menu_bar: false,
            show_menu_app: true,
            show_menu_view: true,
            show_status_bar: false,
            show_status_fps: true,
            menu_app_title: String::new(),
            dockspace_flags: DockFlags::PASSTHRU_CENTRAL_NODE,
            host_window_flags: WindowFlags::NO_TITLE_BAR
                | WindowFlags::NO_RESIZE
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_COLLAPSE
                | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS
                | WindowFlags::NO_NAV_FOCUS,
            host_window_name: "MainDockSpace",
        }
    }
}

/// Lowers the frame rate while the user is inactive.
#[derive(Clone, Debug, PartialEq)]
pub struct FpsIdling {
    /// Frames per second while idling. 0 waits for the next event.
    pub fps_idle: f32,
    pub enable_idling: bool,
    /// Idling starts this long after the last input event.
    pub time_active_after_last_event: Duration,
}

impl Default for FpsIdling {
    fn default() -> Self {
        Self {
            fps_idle: 9.0,
            enable_idling: true,
            time_active_after_last_event: Duration::from_secs(3),
        }
    }
}

/// Where the ImGui ini file and the app window geometry are stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniSettings {
    pub folder: PathBuf,
    /// File name of the ImGui ini file. `None` derives one from the window title.
    pub filename: Option<String>,
}

impl Default for IniSettings {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            filename: None,
        }
    }
}

impl IniSettings {
    pub fn imgui_ini_path(&self, window_title: &str) -> PathBuf {
        let name = match &self.filename {
            Some(name) => name.clone(),
            None => format!("{}.ini", ini_stem_for_title(window_title)),
        };
        self.folder.join(name)
    }

    /// Sibling of the ImGui ini file: `<stem>_app_window.toml`.
    pub fn app_window_geometry_path(&self, window_title: &str) -> PathBuf {
        let ini = self.imgui_ini_path(window_title);
        let stem = ini
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("imgui")
            .to_owned();
        ini.parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{stem}_app_window.toml"))
    }
}

/// Replaces characters that are awkward in file names by `_`.
pub fn ini_stem_for_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "imgui".to_owned()
    } else {
        stem
    }
}

/// Everything the runner needs
pub struct RunnerParams {
    pub callbacks: RunnerCallbacks,
    pub app_window_params: AppWindowParams,
    pub imgui_window_params: ImGuiWindowParams,
    pub fps_idling: FpsIdling,
    pub ini_settings: IniSettings,
    pub present_mode: wgpu::PresentMode,
    /// Set to true to exit at the end of the current frame.
    pub app_shall_exit: bool,
}

impl Default for RunnerParams {
    fn default() -> Self {
        Self {
            callbacks: RunnerCallbacks::default(),
            app_window_params: AppWindowParams::default(),
            imgui_window_params: ImGuiWindowParams::default(),
            fps_idling: FpsIdling::default(),
            ini_settings: IniSettings::default(),
            present_mode: wgpu::PresentMode::Fifo,
            app_shall_exit: false,
        }
    }
}

/// Mutable view on the runner parameters, handed to GUI callbacks each frame.
pub struct RunnerControl<'a> {
    pub app_window_params: &'a mut AppWindowParams,
    pub imgui_window_params: &'a mut ImGuiWindowParams,
    pub fps_idling: &'a mut FpsIdling,
    app_shall_exit: &'a mut bool,
    frame_index: u64,
    is_idling: bool,
}

impl<'a> RunnerControl<'a> {
    pub(crate) fn new(
        app_window_params: &'a mut AppWindowParams,
        imgui_window_params: &'a mut ImGuiWindowParams,
        fps_idling: &'a mut FpsIdling,
        app_shall_exit: &'a mut bool,
        frame_index: u64,
        is_idling: bool,
    ) -> Self {
        Self {
            app_window_params,
            imgui_window_params,
            fps_idling,
            app_shall_exit,
            frame_index,
            is_idling,
        }
    }

    /// Exit at the end of the current frame.
    pub fn request_exit(&mut self) {
        *self.app_shall_exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        *self.app_shall_exit
    }

    /// Resize the window to its content on the next frame.
    pub fn request_resize_to_content(&mut self) {
        self.app_window_params
            .window_geometry
            .resize_app_window_at_next_frame = true;
    }

    /// Index of the frame being built, starting at 0.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn is_idling(&self) -> bool {
        self.is_idling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imgui_window_defaults() {
        let p = ImGuiWindowParams::default();
        assert_eq!(
            p.default_imgui_window_type,
            DefaultImGuiWindowType::ProvideFullScreenWindow
        );
        assert!(!p.show_menu_bar);
        assert!(p.show_menu_app);
        assert!(p.show_menu_view);
        assert!(!p.show_status_bar);
        assert!(p.show_status_fps);
        assert!(p.menu_app_title.is_empty());
    }

    #[test]
    fn fps_idling_defaults() {
        let f = FpsIdling::default();
        assert_eq!(f.fps_idle, 9.0);
        assert!(f.enable_idling);
        assert_eq!(f.time_active_after_last_event, Duration::from_secs(3));
    }

    #[test]
    fn ini_names_derive_from_the_title() {
        let ini = IniSettings::default();
        assert_eq!(ini.imgui_ini_path("My App: v2"), Path::new(".").join("My_App__v2.ini"));
        assert_eq!(ini.imgui_ini_path(""), Path::new(".").join("imgui.ini"));
        assert_eq!(
            ini.app_window_geometry_path("demo"),
            Path::new(".").join("demo_app_window.toml")
        );
    }

    #[test]
    fn explicit_ini_filename_wins() {
        let ini = IniSettings {
            folder: PathBuf::from("/tmp/cfg"),
            filename: Some("layout.ini".into()),
        };
        assert_eq!(ini.imgui_ini_path("ignored"), PathBuf::from("/tmp/cfg/layout.ini"));
        assert_eq!(
            ini.app_window_geometry_path("ignored"),
            PathBuf::from("/tmp/cfg/layout_app_window.toml")
        );
    }

    #[test]
    fn control_requests_flow_back_into_params() {
        let mut params = RunnerParams::default();
        {
            let RunnerParams {
                app_window_params,
                imgui_window_params,
                fps_idling,
                app_shall_exit,
                ..
            } = &mut params;
            let mut ctrl = RunnerControl::new(
                app_window_params,
                imgui_window_params,
                fps_idling,
                app_shall_exit,
                7,
                false,
            );
            assert_eq!(ctrl.frame_index(), 7);
            assert!(!ctrl.exit_requested());
            ctrl.request_resize_to_content();
            ctrl.request_exit();
        }
        assert!(params.app_shall_exit);
        assert!(
            params
                .app_window_params
                .window_geometry
                .resize_app_window_at_next_frame
        );
    }
}
