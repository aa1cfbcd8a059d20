//! Default ImGui setup used by [`RunnerCallbacks`](crate::RunnerCallbacks).
use dear_imgui_rs as imgui;
use dear_imgui_rs::{ConfigFlags, FontSource};
use tracing::debug;

/// Simple built-in themes for convenience
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Classic,
}

pub fn apply_theme(_ctx: &mut imgui::Context, theme: Theme) {
    // Apply via ImGui global helpers; doesn't require a Ui
    unsafe {
        match theme {
            Theme::Dark => dear_imgui_rs::sys::igStyleColorsDark(std::ptr::null_mut()),
            Theme::Light => dear_imgui_rs::sys::igStyleColorsLight(std::ptr::null_mut()),
            Theme::Classic => dear_imgui_rs::sys::igStyleColorsClassic(std::ptr::null_mut()),
        }
    }
}

/// Flags set on `Io::config_flags` by [`setup_default_imgui_config`].
pub fn default_config_flags() -> ConfigFlags {
    ConfigFlags::NAV_ENABLE_KEYBOARD | ConfigFlags::DOCKING_ENABLE
}

/// Enables keyboard navigation and docking. Multi-viewport stays off.
pub fn setup_default_imgui_config(ctx: &mut imgui::Context) {
    let io = ctx.io_mut();
    let mut flags = io.config_flags();
    flags.insert(default_config_flags());
    io.set_config_flags(flags);
}

pub fn setup_default_imgui_style(ctx: &mut imgui::Context) {
    apply_theme(ctx, Theme::Dark);
}

/// Loads ImGui's embedded font at its dynamic size.
pub fn load_default_font(ctx: &mut imgui::Context) {
    let mut fonts = ctx.fonts();
    fonts.add_font(&[FontSource::DefaultFontData {
        size_pixels: None,
        config: None,
    }]);
    debug!("Loaded default font");
}
