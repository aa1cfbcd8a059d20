//! Setup shared by tests that drive a live ImGui context.
use dear_imgui_rs as imgui;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes tests that create an ImGui context.
pub(crate) fn test_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// An 800x600 context with a built font atlas and no ini file.
pub(crate) fn headless_context() -> imgui::Context {
    let mut ctx = imgui::Context::create();
    {
        let io = ctx.io_mut();
        io.set_display_size([800.0, 600.0]);
        io.set_delta_time(1.0 / 60.0);
    }
    let _ = ctx.font_atlas_mut().build();
    let _ = ctx.set_ini_filename::<std::path::PathBuf>(None);
    ctx
}
