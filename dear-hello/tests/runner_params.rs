use dear_hello::window_plan::{FullscreenPlan, MonitorInfo, plan_window};
use dear_hello::{
    AppBuilder, AppWindowParams, DefaultImGuiWindowType, FullScreenMode, RenderingCallbacks,
    RunnerParams, Theme, WindowPositionMode, WindowSizeState,
};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn default_params_describe_a_plain_window() {
    let params = RunnerParams::default();
    assert!(params.callbacks.show_gui.is_none());
    assert!(params.callbacks.show_menus.is_none());
    assert!(params.callbacks.show_status.is_none());
    assert!(!params.app_shall_exit);
    assert_eq!(params.present_mode, wgpu::PresentMode::Fifo);
    assert_eq!(params.app_window_params.window_geometry.size, [800, 600]);
    assert_eq!(
        params.imgui_window_params.default_imgui_window_type,
        DefaultImGuiWindowType::ProvideFullScreenWindow
    );
    assert_eq!(params.imgui_window_params.background_color, [0.45, 0.55, 0.60, 1.00]);
}

#[test]
fn builder_fills_the_params() {
    let exited = Rc::new(Cell::new(false));
    let flag = exited.clone();
    let builder = AppBuilder::new()
        .with_title("Builder")
        .with_size([640, 480])
        .with_window_type(DefaultImGuiWindowType::ProvideFullScreenDockSpace)
        .with_menu_bar(true)
        .with_status_bar(true)
        .with_theme(Theme::Light)
        .restore_previous_geometry(true)
        .on_frame(|_ui, _ctrl| {})
        .on_exit(move |_ctx| flag.set(true));

    let p = builder.params();
    assert_eq!(p.app_window_params.window_title, "Builder");
    assert_eq!(p.app_window_params.window_geometry.size, [640, 480]);
    assert!(p.app_window_params.restore_previous_geometry);
    assert!(p.imgui_window_params.show_menu_bar);
    assert!(p.imgui_window_params.show_status_bar);
    assert!(p.callbacks.show_gui.is_some());

    let params = builder.into_params();
    assert_eq!(
        params.imgui_window_params.default_imgui_window_type,
        DefaultImGuiWindowType::ProvideFullScreenDockSpace
    );
    assert!(!exited.get());
}

#[test]
fn unwired_rendering_callbacks_fail_loudly() {
    let mut rendering = RenderingCallbacks::default();
    assert!((rendering.new_frame_3d)().is_err());
    assert!((rendering.swap_buffers)().is_err());
    assert!(rendering.screenshot().is_empty());
    assert_eq!(rendering.framebuffer_size(), None);
}

#[test]
fn centered_window_on_second_monitor() {
    let monitors = [
        MonitorInfo::default(),
        MonitorInfo {
            position: [1920, 0],
            size: [2560, 1440],
            scale_factor: 2.0,
        },
    ];
    let mut params = AppWindowParams {
        window_title: "Centered".into(),
        ..Default::default()
    };
    params.window_geometry.monitor_idx = 1;
    params.window_geometry.position_mode = WindowPositionMode::MonitorCenter;

    let plan = plan_window(&params, &monitors, false);
    // 800x600 at 96 PPI becomes 1600x1200 on a 2x monitor
    assert_eq!(plan.inner_size, [1600, 1200]);
    assert_eq!(plan.position, Some([1920 + 480, 120]));
    assert_eq!(plan.fullscreen, FullscreenPlan::None);
    assert_eq!(plan.monitor, 1);
}

#[test]
fn work_area_mode_maximizes_on_the_monitor() {
    let mut params = AppWindowParams::default();
    params.window_geometry.full_screen_mode = FullScreenMode::FullMonitorWorkArea;
    let plan = plan_window(&params, &[MonitorInfo::default()], false);
    assert_eq!(plan.fullscreen, FullscreenPlan::WorkArea { monitor: 0 });
    assert_eq!(plan.inner_size, [1920, 1080]);
    assert_eq!(plan.size_state, WindowSizeState::Maximized);
}
