//! Lifecycle callbacks called by the runner.
use crate::default_settings;
use crate::runner_params::RunnerControl;
use dear_imgui_rs as imgui;

/// A callback taking no argument.
pub type VoidFunction = Box<dyn FnMut()>;
/// A callback building widgets for the current frame.
pub type GuiFunction = Box<dyn FnMut(&imgui::Ui, &mut RunnerControl<'_>)>;
/// A callback acting on the ImGui context outside of a frame.
pub type ContextFunction = Box<dyn FnMut(&mut imgui::Context)>;

/// A context callback that does nothing.
pub fn no_action() -> ContextFunction {
    Box::new(|_| {})
}

/// Events emitted by mobile operating systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileEvent {
    /// The application is being terminated by the OS.
    Destroy,
    /// The application is low on memory, free memory if possible.
    LowMemory,
    /// The application is about to enter the background.
    Pause,
    /// The application came back to the foreground and is interactive.
    Resume,
}

/// Callbacks for Android/iOS lifecycle events.
///
/// These must be handled quickly: the OS usually expects an immediate answer and
/// may kill the process shortly after sending the event. A mobile application
/// cannot "quit", it can only be paused.
#[derive(Default)]
pub struct MobileCallbacks {
    pub on_destroy: Option<VoidFunction>,
    pub on_low_memory: Option<VoidFunction>,
    pub on_pause: Option<VoidFunction>,
    pub on_resume: Option<VoidFunction>,
}

impl MobileCallbacks {
    /// Invokes the slot for `event`; empty slots do nothing.
    pub fn fire(&mut self, event: MobileEvent) {
        let slot = match event {
            MobileEvent::Destroy => &mut self.on_destroy,
            MobileEvent::LowMemory => &mut self.on_low_memory,
            MobileEvent::Pause => &mut self.on_pause,
            MobileEvent::Resume => &mut self.on_resume,
        };
        if let Some(cb) = slot.as_mut() {
            cb();
        }
    }
}

/// Callbacks called by the runner during the application lifetime.
pub struct RunnerCallbacks {
    /// Adds the application widgets, every frame.
    pub show_gui: Option<GuiFunction>,
    /// Adds menus to the menu bar (`begin_menu_bar` is already called).
    /// Only shown when `ImGuiWindowParams::show_menu_bar` is set.
    pub show_menus: Option<GuiFunction>,
    /// Adds small items to the status bar, call `same_line` between them.
    pub show_status: Option<GuiFunction>,
    /// Called once after the window, renderer and ImGui are initialized.
    pub post_init: ContextFunction,
    /// Called when fonts can be loaded.
    pub load_additional_fonts: ContextFunction,
    /// Changes ImGui config flags (docking, navigation, ...).
    pub setup_imgui_config: ContextFunction,
    /// Sets the ImGui style.
    pub setup_imgui_style: ContextFunction,
    /// Called once before the renderer shuts down.
    pub before_exit: ContextFunction,
    pub mobile_callbacks: MobileCallbacks,
}

impl Default for RunnerCallbacks {
    fn default() -> Self {
        Self {
            show_gui: None,
            show_menus: None,
            show_status: None,
            post_init: no_action(),
            load_additional_fonts: Box::new(default_settings::load_default_font),
            setup_imgui_config: Box::new(default_settings::setup_default_imgui_config),
            setup_imgui_style: Box::new(default_settings::setup_default_imgui_style),
            before_exit: no_action(),
            mobile_callbacks: MobileCallbacks::default(),
        }
    }
}

impl RunnerCallbacks {
    pub fn with_gui<F>(mut self, f: F) -> Self
    where
        F: FnMut(&imgui::Ui, &mut RunnerControl<'_>) + 'static,
    {
        self.show_gui = Some(Box::new(f));
        self
    }
}
