use dear_hello::{RunnerCallbacks, default_config_flags};
use dear_imgui_rs as imgui;
use std::sync::{Mutex, OnceLock};

fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

#[test]
fn default_callbacks_enable_docking_and_keyboard_nav() {
    let _guard = test_guard();

    let mut ctx = imgui::Context::create();
    let _ = ctx.set_ini_filename::<std::path::PathBuf>(None);
    let mut cbs = RunnerCallbacks::default();
    (cbs.setup_imgui_config)(&mut ctx);
    (cbs.setup_imgui_style)(&mut ctx);
    (cbs.post_init)(&mut ctx);

    let flags = ctx.io().config_flags();
    assert!(flags.contains(default_config_flags()));
    assert!(flags.contains(imgui::ConfigFlags::DOCKING_ENABLE));
}

#[test]
fn default_font_is_loaded_into_the_atlas() {
    let _guard = test_guard();

    let mut ctx = imgui::Context::create();
    let _ = ctx.set_ini_filename::<std::path::PathBuf>(None);
    let font_count = |ctx: &imgui::Context| unsafe { (*ctx.font_atlas().raw()).Fonts.Size };
    let before = font_count(&ctx);

    let mut cbs = RunnerCallbacks::default();
    (cbs.load_additional_fonts)(&mut ctx);
    assert_eq!(font_count(&ctx), before + 1);

    {
        let io = ctx.io_mut();
        io.set_display_size([800.0, 600.0]);
        io.set_delta_time(1.0 / 60.0);
    }
    let ui = ctx.frame();
    ui.text("default font");
    let _ = ctx.render();
}
