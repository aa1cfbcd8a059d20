//! The winit application handler driving a [`RunnerParams`] from window
//! creation to shutdown.
use crate::app_window_params::AppWindowParams;
use crate::auto_size::AutoSizer;
use crate::borderless::{self, BorderlessZone};
use crate::callbacks::{MobileEvent, RunnerCallbacks};
use crate::error::{HelloError, HelloResult};
use crate::geometry::WindowSizeState;
use crate::geometry_store::{self, StoredGeometry};
use crate::idling::{IdleTracker, RedrawDecision};
use crate::rendering_callbacks::RenderingCallbacks;
use crate::runner_params::{DefaultImGuiWindowType, ImGuiWindowParams, RunnerControl, RunnerParams};
use crate::wgpu_backend::{self, WgpuState};
use crate::window_plan::{self, FullscreenPlan, MonitorInfo, WindowPlan};
use dear_imgui_rs as imgui;
use dear_imgui_rs::{Condition, DockFlags, Id, WindowFlags};
use dear_imgui_winit as imgui_winit;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::monitor::{MonitorHandle, VideoModeHandle};
use winit::window::{Fullscreen, ResizeDirection, Window, WindowAttributes, WindowId};

/// Windows always cover the screen on these targets.
const IS_MOBILE: bool = cfg!(any(target_os = "android", target_os = "ios"));

/// Height of the status bar, in ImGui units.
pub const STATUS_BAR_HEIGHT: f32 = 30.0;

const STATUS_BAR_NAME: &str = "##StatusBar";

/// Runs the application described by `params` until it exits.
///
/// Returns an error if the event loop or the window could not be created, or
/// if rendering failed twice in a row.
pub fn run(params: RunnerParams) -> HelloResult<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut runner = Runner::new(params);
    event_loop.run_app(&mut runner)?;
    runner.finish()
}

struct ImguiState {
    context: imgui::Context,
    platform: imgui_winit::WinitPlatform,
    last_frame: Instant,
}

struct AppWindow {
    window: Arc<Window>,
    imgui: ImguiState,
    gpu: Rc<RefCell<WgpuState>>,
    rendering: RenderingCallbacks,
    hidden: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct FrameOutcome {
    skipped: bool,
    measured_size: Option<[f32; 2]>,
    borderless: Option<BorderlessZone>,
}

#[derive(Clone, Copy, Debug)]
struct FrameInfo {
    index: u64,
    is_idling: bool,
    measuring: bool,
}

impl AppWindow {
    fn new(
        event_loop: &ActiveEventLoop,
        params: &mut RunnerParams,
        ini_path: &Path,
    ) -> HelloResult<Self> {
        let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();
        let infos: Vec<MonitorInfo> = monitors.iter().map(monitor_info).collect();
        let plan = window_plan::plan_window(&params.app_window_params, &infos, IS_MOBILE);
        debug!("Window plan: {plan:?}");

        let window = Arc::new(
            event_loop
                .create_window(window_attributes(&plan, &monitors))
                .map_err(|e| HelloError::WindowCreation(e.to_string()))?,
        );
        if plan.size_state == WindowSizeState::Minimized {
            window.set_minimized(true);
        }

        let mut context = imgui::Context::create();
        context
            .set_ini_filename(Some(ini_path.to_path_buf()))
            .map_err(|e| HelloError::ImGui(format!("Failed to set ini file: {e}")))?;

        // config/style/fonts before the renderer uploads the font atlas
        let cbs: &mut RunnerCallbacks = &mut params.callbacks;
        (cbs.setup_imgui_config)(&mut context);
        (cbs.setup_imgui_style)(&mut context);
        (cbs.load_additional_fonts)(&mut context);

        let mut platform = imgui_winit::WinitPlatform::new(&mut context);
        platform.attach_window(&window, imgui_winit::HiDpiMode::Default, &mut context);

        let gpu = Rc::new(RefCell::new(WgpuState::new(
            window.clone(),
            params.present_mode,
            &mut context,
        )?));
        let rendering = wgpu_backend::rendering_callbacks(&gpu);

        Ok(Self {
            window,
            imgui: ImguiState {
                context,
                platform,
                last_frame: Instant::now(),
            },
            gpu,
            rendering,
            hidden: !plan.visible,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.borrow_mut().resize(new_size);
    }

    fn apply_visibility(&mut self, params: &AppWindowParams) {
        let want_hidden = params.hidden && params.can_hide();
        if want_hidden != self.hidden {
            debug!("Window visibility changed: hidden={want_hidden}");
            self.window.set_visible(!want_hidden);
            self.hidden = want_hidden;
        }
    }

    fn render(&mut self, params: &mut RunnerParams, info: FrameInfo) -> HelloResult<FrameOutcome> {
        self.apply_visibility(&params.app_window_params);

        let now = Instant::now();
        let delta_time = now - self.imgui.last_frame;
        self.imgui
            .context
            .io_mut()
            .set_delta_time(delta_time.as_secs_f32());
        self.imgui.last_frame = now;

        match (self.rendering.new_frame_3d)() {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                debug!("Skipping frame: {e}");
                return Ok(FrameOutcome {
                    skipped: true,
                    ..Default::default()
                });
            }
            Err(e) => return Err(e),
        }

        self.imgui
            .platform
            .prepare_frame(&self.window, &mut self.imgui.context);
        let ui = self.imgui.context.frame();

        let RunnerParams {
            callbacks,
            app_window_params,
            imgui_window_params,
            fps_idling,
            app_shall_exit,
            ..
        } = params;
        let mut ctrl = RunnerControl::new(
            app_window_params,
            imgui_window_params,
            fps_idling,
            app_shall_exit,
            info.index,
            info.is_idling,
        );

        let measured_size = show_default_windows(ui, callbacks, &mut ctrl, info.measuring);
        let borderless = if ctrl.app_window_params.borderless {
            borderless::handle_borderless_zones(ui, ctrl.app_window_params)
        } else {
            None
        };
        let background = ctrl.imgui_window_params.background_color;

        let draw_data = self.imgui.context.render();
        (self.rendering.frame_3d_clear_color)(background)?;
        (self.rendering.render_draw_data_to_3d)(draw_data)?;
        (self.rendering.swap_buffers)()?;

        Ok(FrameOutcome {
            skipped: false,
            measured_size,
            borderless,
        })
    }

    fn resize_to_content(&self, size: [f32; 2]) {
        let size = LogicalSize::new(size[0].max(1.0) as f64, size[1].max(1.0) as f64);
        info!("Resizing window to its content: {size:?}");
        if let Some(applied) = self.window.request_inner_size(size) {
            self.gpu.borrow_mut().resize(applied);
        }
    }

    fn handle_borderless(&self, zone: BorderlessZone, app_shall_exit: &mut bool) {
        let result = match zone {
            BorderlessZone::Move => self.window.drag_window(),
            BorderlessZone::Resize => self.window.drag_resize_window(ResizeDirection::SouthEast),
            BorderlessZone::Close => {
                *app_shall_exit = true;
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("Borderless {zone:?} not supported: {e}");
        }
    }

    /// The window geometry as it should be restored on the next run.
    fn stored_geometry(&self, params: &AppWindowParams) -> StoredGeometry {
        let geometry = &params.window_geometry;
        let minimized = self.window.is_minimized().unwrap_or(false);
        let inner = self.window.inner_size();
        let size = if minimized || inner.width == 0 || inner.height == 0 {
            geometry.size
        } else {
            geometry
                .window_size_measure_mode
                .from_screen_coords([inner.width, inner.height], self.window.scale_factor())
        };
        let position = self
            .window
            .outer_position()
            .map(|p| [p.x, p.y])
            .unwrap_or(geometry.position);
        let monitor_idx = self
            .window
            .current_monitor()
            .and_then(|current| self.window.available_monitors().position(|m| m == current))
            .unwrap_or(geometry.monitor_idx);

        StoredGeometry {
            size,
            position,
            monitor_idx,
            window_size_state: persisted_size_state(minimized, self.window.is_maximized()),
        }
    }
}

fn monitor_info(monitor: &MonitorHandle) -> MonitorInfo {
    let position = monitor.position();
    let size = monitor.size();
    MonitorInfo {
        position: [position.x, position.y],
        size: [size.width, size.height],
        scale_factor: monitor.scale_factor(),
    }
}

fn window_attributes(plan: &WindowPlan, monitors: &[MonitorHandle]) -> WindowAttributes {
    let mut attributes = Window::default_attributes()
        .with_title(plan.title.clone())
        .with_inner_size(PhysicalSize::new(plan.inner_size[0], plan.inner_size[1]))
        .with_resizable(plan.resizable)
        .with_visible(plan.visible)
        .with_decorations(plan.decorations)
        .with_maximized(plan.size_state == WindowSizeState::Maximized);
    if let Some([x, y]) = plan.position {
        attributes = attributes.with_position(PhysicalPosition::new(x, y));
    }

    let fullscreen = match plan.fullscreen {
        FullscreenPlan::None | FullscreenPlan::WorkArea { .. } => None,
        FullscreenPlan::Borderless { monitor } => {
            Some(Fullscreen::Borderless(monitors.get(monitor).cloned()))
        }
        FullscreenPlan::Exclusive { monitor, size } => {
            let handle = monitors.get(monitor);
            match handle.and_then(|m| exclusive_video_mode(m, size)) {
                Some(mode) => Some(Fullscreen::Exclusive(mode)),
                None => {
                    warn!("No video mode for {size:?}, using borderless full screen");
                    Some(Fullscreen::Borderless(handle.cloned()))
                }
            }
        }
    };
    attributes.with_fullscreen(fullscreen)
}

/// The video mode of `monitor` closest to `size`, highest refresh rate first.
fn exclusive_video_mode(monitor: &MonitorHandle, size: [u32; 2]) -> Option<VideoModeHandle> {
    let mut modes: Vec<VideoModeHandle> = monitor.video_modes().collect();
    modes.sort_by_key(|m| std::cmp::Reverse(m.refresh_rate_millihertz()));
    let sizes: Vec<[u32; 2]> = modes
        .iter()
        .map(|m| {
            let s = m.size();
            [s.width, s.height]
        })
        .collect();
    let idx = window_plan::closest_video_mode(&sizes, size)?;
    modes.into_iter().nth(idx)
}

/// A minimized window reopens in its standard state.
fn persisted_size_state(minimized: bool, maximized: bool) -> WindowSizeState {
    if maximized && !minimized {
        WindowSizeState::Maximized
    } else {
        WindowSizeState::Standard
    }
}

/// Title of the App menu: the explicit title, else the window title.
fn app_menu_title(imgui_params: &ImGuiWindowParams, app_params: &AppWindowParams) -> String {
    if !imgui_params.menu_app_title.is_empty() {
        imgui_params.menu_app_title.clone()
    } else if !app_params.window_title.is_empty() {
        app_params.window_title.clone()
    } else {
        "App".to_owned()
    }
}

/// Events that keep the application out of idling.
fn is_user_input(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput { .. }
            | WindowEvent::ModifiersChanged(_)
            | WindowEvent::Ime(_)
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorEntered { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::Touch(_)
            | WindowEvent::Focused(_)
            | WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. }
            | WindowEvent::DroppedFile(_)
    )
}

/// Draws the host window (or dockspace), the menu bar, the user GUI and the
/// status bar. Returns the measured content size while auto-sizing.
fn show_default_windows(
    ui: &imgui::Ui,
    callbacks: &mut RunnerCallbacks,
    ctrl: &mut RunnerControl<'_>,
    measuring: bool,
) -> Option<[f32; 2]> {
    let window_type = ctrl.imgui_window_params.default_imgui_window_type;
    let show_menu_bar = ctrl.imgui_window_params.show_menu_bar;
    let status_bar_visible = ctrl.imgui_window_params.show_status_bar;
    let host_name = ctrl.imgui_window_params.host_window_name;
    let dock_flags = ctrl.imgui_window_params.dockspace_flags;
    let mut host_flags = ctrl.imgui_window_params.host_window_flags;
    if show_menu_bar {
        host_flags |= WindowFlags::MENU_BAR;
    }

    let viewport = ui.main_viewport();
    let viewport_id = viewport.id();
    let (mut pos, mut size) = (viewport.work_pos(), viewport.work_size());
    let insets = &ctrl.app_window_params.edge_insets;
    if ctrl.app_window_params.handle_edge_insets && !insets.is_zero() {
        (pos, size) = insets.inset_rect(pos, size);
    }
    let status_height = if status_bar_visible { STATUS_BAR_HEIGHT } else { 0.0 };
    size[1] = (size[1] - status_height).max(0.0);

    let measured = match window_type {
        DefaultImGuiWindowType::ProvideFullScreenWindow => {
            let builder = ui.window(host_name).position(pos, Condition::Always);
            let builder = if measuring {
                builder.flags(host_flags | WindowFlags::ALWAYS_AUTO_RESIZE)
            } else {
                builder.flags(host_flags).size(size, Condition::Always)
            };
            builder
                .build(|| {
                    if show_menu_bar {
                        if let Some(_bar) = ui.begin_menu_bar() {
                            show_menu_bar_contents(ui, callbacks, ctrl);
                        }
                    }
                    if let Some(gui) = callbacks.show_gui.as_mut() {
                        gui(ui, ctrl);
                    }
                    ui.window_size()
                })
                .filter(|_| measuring)
                .map(|[w, h]| [w, h + status_height])
        }
        DefaultImGuiWindowType::ProvideFullScreenDockSpace => {
            if dock_flags.contains(DockFlags::PASSTHRU_CENTRAL_NODE) {
                host_flags |= WindowFlags::NO_BACKGROUND;
            }
            ui.set_next_window_viewport(Id::from(viewport_id));
            ui.window(host_name)
                .flags(host_flags)
                .position(pos, Condition::Always)
                .size(size, Condition::Always)
                .build(|| {
                    if show_menu_bar {
                        if let Some(_bar) = ui.begin_menu_bar() {
                            show_menu_bar_contents(ui, callbacks, ctrl);
                        }
                    }
                    let _ = ui.dockspace_over_main_viewport_with_flags(Id::from(0u32), dock_flags);
                });
            if let Some(gui) = callbacks.show_gui.as_mut() {
                gui(ui, ctrl);
            }
            None
        }
        DefaultImGuiWindowType::NoDefaultWindow => {
            if show_menu_bar {
                if let Some(_bar) = ui.begin_main_menu_bar() {
                    show_menu_bar_contents(ui, callbacks, ctrl);
                }
            }
            if let Some(gui) = callbacks.show_gui.as_mut() {
                gui(ui, ctrl);
            }
            None
        }
    };

    if status_bar_visible {
        show_status_bar(
            ui,
            callbacks,
            ctrl,
            [pos[0], pos[1] + size[1]],
            [size[0], status_height],
        );
    }
    measured
}

fn show_menu_bar_contents(
    ui: &imgui::Ui,
    callbacks: &mut RunnerCallbacks,
    ctrl: &mut RunnerControl<'_>,
) {
    if ctrl.imgui_window_params.show_menu_app {
        let title = app_menu_title(ctrl.imgui_window_params, ctrl.app_window_params);
        ui.menu(title, || {
            if ui.menu_item("Quit") {
                ctrl.request_exit();
            }
        });
    }
    if ctrl.imgui_window_params.show_menu_view {
        ui.menu("View", || {
            let params = &mut *ctrl.imgui_window_params;
            ui.menu_item_toggle("Status bar", None::<&str>, &mut params.show_status_bar, true);
            ui.menu_item_toggle(
                "FPS in status bar",
                None::<&str>,
                &mut params.show_status_fps,
                true,
            );
            ui.menu_item_toggle(
                "Enable idling",
                None::<&str>,
                &mut ctrl.fps_idling.enable_idling,
                true,
            );
        });
    }
    if let Some(menus) = callbacks.show_menus.as_mut() {
        menus(ui, ctrl);
    }
}

fn show_status_bar(
    ui: &imgui::Ui,
    callbacks: &mut RunnerCallbacks,
    ctrl: &mut RunnerControl<'_>,
    pos: [f32; 2],
    size: [f32; 2],
) {
    let flags = WindowFlags::NO_TITLE_BAR
        | WindowFlags::NO_RESIZE
        | WindowFlags::NO_MOVE
        | WindowFlags::NO_COLLAPSE
        | WindowFlags::NO_SCROLLBAR
        | WindowFlags::NO_SAVED_SETTINGS
        | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS
        | WindowFlags::NO_NAV_FOCUS
        | WindowFlags::NO_DOCKING;
    ui.window(STATUS_BAR_NAME)
        .flags(flags)
        .position(pos, Condition::Always)
        .size(size, Condition::Always)
        .build(|| {
            let has_user_status = callbacks.show_status.is_some();
            if let Some(status) = callbacks.show_status.as_mut() {
                status(ui, ctrl);
            }
            if ctrl.imgui_window_params.show_status_fps {
                if has_user_status {
                    ui.same_line();
                }
                let idling = if ctrl.is_idling() { " (idling)" } else { "" };
                ui.text(format!("FPS: {:.1}{idling}", ui.io().framerate()));
            }
        });
}

pub(crate) struct Runner {
    params: RunnerParams,
    window: Option<AppWindow>,
    ini_path: PathBuf,
    geometry_path: PathBuf,
    idle: IdleTracker,
    auto_size: AutoSizer,
    frame_index: u64,
    resumed_once: bool,
    recovering: bool,
    shut_down: bool,
    fatal: Option<HelloError>,
}

impl Runner {
    pub(crate) fn new(mut params: RunnerParams) -> Self {
        let title = params.app_window_params.window_title.clone();
        let ini_path = params.ini_settings.imgui_ini_path(&title);
        let geometry_path = params.ini_settings.app_window_geometry_path(&title);
        if params.app_window_params.restore_previous_geometry {
            geometry_store::restore_into(
                &geometry_path,
                &mut params.app_window_params.window_geometry,
            );
        }
        let auto_size = AutoSizer::new(params.app_window_params.window_geometry.size_auto);
        Self {
            params,
            window: None,
            ini_path,
            geometry_path,
            idle: IdleTracker::new(Instant::now()),
            auto_size,
            frame_index: 0,
            resumed_once: false,
            recovering: false,
            shut_down: false,
            fatal: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> HelloResult<()> {
        let mut window = AppWindow::new(event_loop, &mut self.params, &self.ini_path)?;
        (self.params.callbacks.post_init)(&mut window.imgui.context);
        window.window.request_redraw();
        self.window = Some(window);
        info!("Window created successfully");
        Ok(())
    }

    fn fire_mobile(&mut self, event: MobileEvent) {
        if IS_MOBILE {
            debug!("Mobile event: {event:?}");
            self.params.callbacks.mobile_callbacks.fire(event);
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        let now = Instant::now();
        let info = FrameInfo {
            index: self.frame_index,
            is_idling: self.idle.is_idling(now, &self.params.fps_idling),
            measuring: self
                .auto_size
                .begin_frame(&mut self.params.app_window_params.window_geometry),
        };
        let result = window.render(&mut self.params, info);
        self.idle.on_frame(now);

        match result {
            Ok(outcome) if outcome.skipped => {}
            Ok(outcome) => {
                self.recovering = false;
                self.frame_index += 1;
                if let Some(size) = self.auto_size.end_frame(outcome.measured_size) {
                    window.resize_to_content(size);
                }
                if let Some(zone) = outcome.borderless {
                    window.handle_borderless(zone, &mut self.params.app_shall_exit);
                }
            }
            Err(e) if !self.recovering => {
                error!("Render error: {e}; attempting to recover by recreating GPU state");
                self.recovering = true;
                self.window = None;
                if let Err(e) = self.init_window(event_loop) {
                    error!("Failed to recreate window after GPU error: {e}");
                    self.fatal = Some(e);
                    self.params.app_shall_exit = true;
                }
            }
            Err(e) => {
                error!("Render error after recovery: {e}");
                self.fatal = Some(e);
                self.params.app_shall_exit = true;
            }
        }

        if self.params.app_shall_exit {
            self.shutdown(event_loop);
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if let Some(mut window) = self.window.take() {
            if self.params.app_window_params.restore_previous_geometry {
                let stored = window.stored_geometry(&self.params.app_window_params);
                if let Err(e) = geometry_store::save(&self.geometry_path, &stored) {
                    warn!("Could not save window geometry: {e}");
                }
            }
            (self.params.callbacks.before_exit)(&mut window.imgui.context);
            if let Err(e) = (window.rendering.shutdown_3d)() {
                warn!("Renderer shutdown failed: {e}");
            }
        }
        info!("Application exiting after {} frames", self.frame_index);
        event_loop.exit();
    }

    fn finish(self) -> HelloResult<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_once {
            self.fire_mobile(MobileEvent::Resume);
        }
        self.resumed_once = true;

        if self.window.is_none() && !self.shut_down {
            if let Err(e) = self.init_window(event_loop) {
                error!("Failed to create window: {e}");
                self.fatal = Some(e);
                self.shut_down = true;
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.fire_mobile(MobileEvent::Pause);
    }

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        self.fire_mobile(MobileEvent::LowMemory);
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.fire_mobile(MobileEvent::Destroy);
        self.shutdown(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if is_user_input(&event) {
            self.idle.on_input_event(Instant::now());
        }

        if let WindowEvent::RedrawRequested = event {
            self.render_frame(event_loop);
            return;
        }

        let Some(window) = self.window.as_mut() else {
            return;
        };
        window.imgui.platform.handle_window_event(
            &mut window.imgui.context,
            &window.window,
            &event,
        );

        match event {
            WindowEvent::Resized(physical_size) => {
                window.resize(physical_size);
                window.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = window.window.inner_size();
                window.resize(new_size);
                window.window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                info!("Close requested");
                self.params.app_shall_exit = true;
                self.shutdown(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let now = Instant::now();
        let decision = self.idle.decide(now, &self.params.fps_idling);
        let due = self.idle.frame_due(now, decision);

        event_loop.set_control_flow(match decision {
            RedrawDecision::Poll => ControlFlow::Poll,
            RedrawDecision::Wait => ControlFlow::Wait,
            RedrawDecision::WaitUntil(deadline) => ControlFlow::WaitUntil(deadline),
        });

        if due {
            // hidden windows receive no redraw requests
            if window.hidden {
                self.render_frame(event_loop);
            } else {
                window.window.request_redraw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_window_params::EdgeInsets;

    #[test]
    fn app_menu_title_falls_back_to_window_title() {
        let mut imgui_params = ImGuiWindowParams::default();
        let mut app_params = AppWindowParams::default();
        app_params.window_title = "Viewer".into();
        assert_eq!(app_menu_title(&imgui_params, &app_params), "Viewer");

        imgui_params.menu_app_title = "My App".into();
        assert_eq!(app_menu_title(&imgui_params, &app_params), "My App");

        imgui_params.menu_app_title.clear();
        app_params.window_title.clear();
        assert_eq!(app_menu_title(&imgui_params, &app_params), "App");
    }

    #[test]
    fn minimized_windows_are_not_persisted_as_minimized() {
        assert_eq!(persisted_size_state(true, false), WindowSizeState::Standard);
        assert_eq!(persisted_size_state(true, true), WindowSizeState::Standard);
        assert_eq!(persisted_size_state(false, true), WindowSizeState::Maximized);
        assert_eq!(persisted_size_state(false, false), WindowSizeState::Standard);
    }

    type HostRect = Rc<RefCell<Option<([f32; 2], [f32; 2])>>>;

    /// Runs one frame of the default windows and returns the host window rect
    /// seen by `show_gui`.
    fn host_window_rect(params: &mut RunnerParams) -> Option<([f32; 2], [f32; 2])> {
        let _guard = crate::test_support::test_guard();
        let mut ctx = crate::test_support::headless_context();

        let seen: HostRect = Rc::default();
        let sink = seen.clone();
        params.callbacks.show_gui = Some(Box::new(move |ui, _ctrl| {
            *sink.borrow_mut() = Some((ui.window_pos(), ui.window_size()));
        }));

        let ui = ctx.frame();
        let RunnerParams {
            callbacks,
            app_window_params,
            imgui_window_params,
            fps_idling,
            app_shall_exit,
            ..
        } = params;
        let mut ctrl = RunnerControl::new(
            app_window_params,
            imgui_window_params,
            fps_idling,
            app_shall_exit,
            0,
            false,
        );
        show_default_windows(ui, callbacks, &mut ctrl, false);
        let _ = ctx.render();

        seen.borrow_mut().take()
    }

    #[test]
    fn host_window_covers_the_viewport() {
        let mut params = RunnerParams::default();
        assert_eq!(
            host_window_rect(&mut params),
            Some(([0.0, 0.0], [800.0, 600.0]))
        );
    }

    #[test]
    fn status_bar_shrinks_the_host_window() {
        let mut params = RunnerParams::default();
        params.imgui_window_params.show_status_bar = true;
        assert_eq!(
            host_window_rect(&mut params),
            Some(([0.0, 0.0], [800.0, 600.0 - STATUS_BAR_HEIGHT]))
        );
    }

    #[test]
    fn edge_insets_apply_only_when_handled() {
        let mut params = RunnerParams::default();
        params.app_window_params.edge_insets = EdgeInsets {
            top: 10.0,
            left: 20.0,
            bottom: 5.0,
            right: 15.0,
        };
        assert_eq!(
            host_window_rect(&mut params),
            Some(([20.0, 10.0], [765.0, 585.0]))
        );

        params.app_window_params.handle_edge_insets = false;
        assert_eq!(
            host_window_rect(&mut params),
            Some(([0.0, 0.0], [800.0, 600.0]))
        );
    }

    #[test]
    fn focus_and_resize_count_as_activity() {
        assert!(is_user_input(&WindowEvent::Focused(true)));
        assert!(is_user_input(&WindowEvent::Resized(PhysicalSize::new(10, 10))));
        assert!(!is_user_input(&WindowEvent::RedrawRequested));
        assert!(!is_user_input(&WindowEvent::CloseRequested));
    }
}
