//! Exercises the window parameters at runtime: menu and status bars,
//! resize-to-content, hiding, borderless handles and geometry persistence.
//!
//! Run with:
//!   cargo run -p dear-hello-demos --bin window_params
//!   cargo run -p dear-hello-demos --bin window_params -- --borderless

#[path = "../support/logging.rs"]
mod logging;

use dear_hello::{DefaultImGuiWindowType, RunnerParams, WindowPositionMode};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{error, info};

fn main() {
    logging::init_tracing();
    let borderless = std::env::args().any(|a| a == "--borderless");

    let mut params = RunnerParams::default();
    params.app_window_params.window_title = "Window Params".into();
    params.app_window_params.restore_previous_geometry = true;
    params.app_window_params.borderless = borderless;
    params.app_window_params.window_geometry.position_mode = WindowPositionMode::MonitorCenter;
    params.app_window_params.window_geometry.size_auto = true;
    params.imgui_window_params.default_imgui_window_type =
        DefaultImGuiWindowType::ProvideFullScreenWindow;
    params.imgui_window_params.show_menu_bar = true;
    params.imgui_window_params.show_status_bar = true;
    params.fps_idling.fps_idle = 4.0;

    let frames = Rc::new(Cell::new(0u64));
    let post_init_frames = frames.clone();
    params.callbacks.post_init = Box::new(move |_ctx| {
        info!("post_init after {} frames", post_init_frames.get());
    });

    let mut extra_lines = 0usize;
    let mut hidden_until: Option<Instant> = None;
    let gui_frames = frames.clone();
    params.callbacks.show_gui = Some(Box::new(move |ui, ctrl| {
        gui_frames.set(ctrl.frame_index());

        if let Some(until) = hidden_until {
            if Instant::now() >= until {
                ctrl.app_window_params.hidden = false;
                hidden_until = None;
            }
        }

        ui.text(format!("Frame {}", ctrl.frame_index()));
        ui.text(format!(
            "Idling: {} (fps_idle = {})",
            ctrl.is_idling(),
            ctrl.fps_idling.fps_idle
        ));
        ui.separator();

        if ui.button("Add a line") {
            extra_lines += 1;
        }
        ui.same_line();
        if ui.button("Remove a line") {
            extra_lines = extra_lines.saturating_sub(1);
        }
        for i in 0..extra_lines {
            ui.text(format!("Extra line {i}"));
        }
        if ui.button("Resize to content") {
            ctrl.request_resize_to_content();
        }
        if ui.button("Hide for 2 seconds") {
            ctrl.app_window_params.hidden = true;
            hidden_until = Some(Instant::now() + Duration::from_secs(2));
        }
        ui.checkbox("Enable idling", &mut ctrl.fps_idling.enable_idling);
        ui.color_edit4(
            "Background",
            &mut ctrl.imgui_window_params.background_color,
        );
        if ui.button("Quit") {
            ctrl.request_exit();
        }
    }));

    params.callbacks.show_menus = Some(Box::new(|ui, ctrl| {
        ui.menu("Window", || {
            if ui.menu_item("Resize to content") {
                ctrl.request_resize_to_content();
            }
        });
    }));

    params.callbacks.show_status = Some(Box::new(|ui, ctrl| {
        ui.text(&ctrl.app_window_params.window_title);
    }));

    params.callbacks.before_exit = Box::new(move |_ctx| {
        info!("Exiting after {} frames", frames.get());
    });

    if let Err(e) = dear_hello::run(params) {
        error!("window_params failed: {e}");
        std::process::exit(1);
    }
    info!("Window geometry saved; rerun to restore it");
}
