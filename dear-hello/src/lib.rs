//! dear-hello: application runner for dear-imgui-rs (Winit + WGPU)
//!
//! The application is described by a [`RunnerParams`]: the OS window
//! ([`AppWindowParams`]), the ImGui windows the runner provides
//! ([`ImGuiWindowParams`]), and the callbacks invoked during its lifetime
//! ([`RunnerCallbacks`]). [`run`] drives it until exit.
//!
//! Quickstart
//! ```no_run
//! use dear_hello::run_simple;
//!
//! fn main() {
//!     run_simple(|ui| ui.text("Hello, world!"), [400, 200], "Hello").unwrap();
//! }
//! ```
//!
//! Full configuration
//! ```no_run
//! use dear_hello::{run, RunnerParams, DefaultImGuiWindowType};
//!
//! let mut params = RunnerParams::default();
//! params.app_window_params.window_title = "Docking".into();
//! params.app_window_params.restore_previous_geometry = true;
//! params.imgui_window_params.default_imgui_window_type =
//!     DefaultImGuiWindowType::ProvideFullScreenDockSpace;
//! params.imgui_window_params.show_menu_bar = true;
//! params.callbacks.show_gui = Some(Box::new(|ui, ctrl| {
//!     ui.window("Tools").build(|| {
//!         if ui.button("Quit") {
//!             ctrl.request_exit();
//!         }
//!     });
//! }));
//! run(params).unwrap();
//! ```
use dear_imgui_rs as imgui;

mod app_window_params;
mod auto_size;
mod borderless;
mod callbacks;
mod default_settings;
mod error;
mod geometry;
pub mod geometry_store;
mod idling;
mod rendering_callbacks;
mod runner;
mod runner_params;
#[cfg(test)]
mod test_support;
mod wgpu_backend;
pub mod window_plan;

pub use app_window_params::{AppWindowParams, EdgeInsets};
pub use auto_size::{AutoSizer, MEASURE_FRAMES};
pub use borderless::{BorderlessZone, BorderlessZones, Rect};
pub use callbacks::{
    ContextFunction, GuiFunction, MobileCallbacks, MobileEvent, RunnerCallbacks, VoidFunction,
    no_action,
};
pub use default_settings::{
    Theme, apply_theme, default_config_flags, load_default_font, setup_default_imgui_config,
    setup_default_imgui_style,
};
pub use error::{HelloError, HelloResult};
pub use geometry::{
    DEFAULT_SCREEN_POSITION, DEFAULT_WINDOW_SIZE, FullScreenMode, REFERENCE_PPI, ScreenPosition,
    ScreenSize, WindowGeometry, WindowPositionMode, WindowSizeMeasureMode, WindowSizeState,
};
pub use idling::{IdleTracker, RedrawDecision};
pub use rendering_callbacks::{ImageBuffer, RenderingCallbacks};
pub use runner::{STATUS_BAR_HEIGHT, run};
pub use runner_params::{
    DefaultImGuiWindowType, FpsIdling, ImGuiWindowParams, IniSettings, RunnerControl,
    RunnerParams, ini_stem_for_title,
};

/// Runs `gui` every frame in a window of `window_size` titled `window_title`.
pub fn run_simple<F>(mut gui: F, window_size: ScreenSize, window_title: &str) -> HelloResult<()>
where
    F: FnMut(&imgui::Ui) + 'static,
{
    let mut params = RunnerParams::default();
    params.app_window_params.window_title = window_title.to_owned();
    params.app_window_params.window_geometry.size = window_size;
    params.callbacks.show_gui = Some(Box::new(move |ui, _ctrl| gui(ui)));
    run(params)
}

/// App builder for ergonomic configuration
#[derive(Default)]
pub struct AppBuilder {
    params: RunnerParams,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_params(mut self, params: RunnerParams) -> Self {
        self.params = params;
        self
    }
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.params.app_window_params.window_title = title.into();
        self
    }
    pub fn with_size(mut self, size: ScreenSize) -> Self {
        self.params.app_window_params.window_geometry.size = size;
        self
    }
    pub fn with_window_type(mut self, window_type: DefaultImGuiWindowType) -> Self {
        self.params.imgui_window_params.default_imgui_window_type = window_type;
        self
    }
    pub fn with_menu_bar(mut self, show: bool) -> Self {
        self.params.imgui_window_params.show_menu_bar = show;
        self
    }
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.params.imgui_window_params.show_status_bar = show;
        self
    }
    pub fn restore_previous_geometry(mut self, restore: bool) -> Self {
        self.params.app_window_params.restore_previous_geometry = restore;
        self
    }
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.params.callbacks.setup_imgui_style = Box::new(move |ctx| apply_theme(ctx, theme));
        self
    }
    pub fn on_setup<F: FnMut(&mut imgui::Context) + 'static>(mut self, f: F) -> Self {
        self.params.callbacks.setup_imgui_config = Box::new(f);
        self
    }
    pub fn on_style<F: FnMut(&mut imgui::Context) + 'static>(mut self, f: F) -> Self {
        self.params.callbacks.setup_imgui_style = Box::new(f);
        self
    }
    pub fn on_fonts<F: FnMut(&mut imgui::Context) + 'static>(mut self, f: F) -> Self {
        self.params.callbacks.load_additional_fonts = Box::new(f);
        self
    }
    pub fn on_post_init<F: FnMut(&mut imgui::Context) + 'static>(mut self, f: F) -> Self {
        self.params.callbacks.post_init = Box::new(f);
        self
    }
    pub fn on_frame<F>(mut self, f: F) -> Self
    where
        F: FnMut(&imgui::Ui, &mut RunnerControl<'_>) + 'static,
    {
        self.params.callbacks.show_gui = Some(Box::new(f));
        self
    }
    pub fn on_menus<F>(mut self, f: F) -> Self
    where
        F: FnMut(&imgui::Ui, &mut RunnerControl<'_>) + 'static,
    {
        self.params.callbacks.show_menus = Some(Box::new(f));
        self
    }
    pub fn on_status<F>(mut self, f: F) -> Self
    where
        F: FnMut(&imgui::Ui, &mut RunnerControl<'_>) + 'static,
    {
        self.params.callbacks.show_status = Some(Box::new(f));
        self
    }
    pub fn on_exit<F: FnMut(&mut imgui::Context) + 'static>(mut self, f: F) -> Self {
        self.params.callbacks.before_exit = Box::new(f);
        self
    }
    /// The parameters built so far.
    pub fn params(&self) -> &RunnerParams {
        &self.params
    }
    pub fn into_params(self) -> RunnerParams {
        self.params
    }
    pub fn run(self) -> HelloResult<()> {
        run(self.params)
    }
}
