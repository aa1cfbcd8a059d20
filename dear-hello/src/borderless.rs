//! Move, resize and close handles for borderless windows.
use crate::app_window_params::AppWindowParams;
use dear_imgui_rs as imgui;
use dear_imgui_rs::{MouseButton, PopupFlags, StyleColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderlessZone {
    Move,
    Resize,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub fn contains(&self, p: [f32; 2]) -> bool {
        p[0] >= self.min[0] && p[0] < self.max[0] && p[1] >= self.min[1] && p[1] < self.max[1]
    }
}

/// Interaction zones of a borderless window, in ImGui coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderlessZones {
    pub drag: Option<Rect>,
    pub resize: Option<Rect>,
    pub close: Option<Rect>,
}

impl BorderlessZones {
    /// Lays the zones out over the viewport `pos`/`size`.
    pub fn new(pos: [f32; 2], size: [f32; 2], frame_height: f32, params: &AppWindowParams) -> Self {
        let bar = frame_height * 1.2;
        let right = pos[0] + size[0];
        let bottom = pos[1] + size[1];

        let close = params.borderless_closable.then(|| Rect {
            min: [right - bar, pos[1]],
            max: [right, pos[1] + bar],
        });
        let drag = params.borderless_movable.then(|| Rect {
            min: pos,
            max: [close.map_or(right, |c| c.min[0]), pos[1] + bar],
        });
        let resize = params.borderless_resizable.then(|| Rect {
            min: [right - frame_height, bottom - frame_height],
            max: [right, bottom],
        });
        Self {
            drag,
            resize,
            close,
        }
    }

    pub fn hit_test(&self, mouse: [f32; 2]) -> Option<BorderlessZone> {
        [
            (self.close, BorderlessZone::Close),
            (self.resize, BorderlessZone::Resize),
            (self.drag, BorderlessZone::Move),
        ]
        .into_iter()
        .find_map(|(rect, zone)| rect.filter(|r| r.contains(mouse)).map(|_| zone))
    }

    fn rect(&self, zone: BorderlessZone) -> Option<Rect> {
        match zone {
            BorderlessZone::Move => self.drag,
            BorderlessZone::Resize => self.resize,
            BorderlessZone::Close => self.close,
        }
    }
}

/// Draws the hovered zone and returns the zone clicked this frame, if any.
///
/// Widgets and open popups take precedence over the zones.
pub(crate) fn handle_borderless_zones(
    ui: &imgui::Ui,
    params: &AppWindowParams,
) -> Option<BorderlessZone> {
    if ui.is_any_item_hovered()
        || ui.is_any_item_active()
        || ui.is_popup_open_with_flags("", PopupFlags::ANY_POPUP)
    {
        return None;
    }
    let viewport = ui.main_viewport();
    let zones = BorderlessZones::new(viewport.pos(), viewport.size(), ui.frame_height(), params);
    let hovered = zones.hit_test(ui.io().mouse_pos())?;
    let rect = zones.rect(hovered)?;

    let color = params.effective_highlight_color(ui.clone_style().color(StyleColor::TitleBgActive));
    let draw_list = ui.get_foreground_draw_list();
    draw_list
        .add_rect(rect.min, rect.max, color)
        .filled(true)
        .rounding(3.0)
        .build();

    let line_color = [1.0, 1.0, 1.0, 0.9];
    let pad = (rect.max[1] - rect.min[1]) * 0.3;
    let (a, b) = (
        [rect.min[0] + pad, rect.min[1] + pad],
        [rect.max[0] - pad, rect.max[1] - pad],
    );
    match hovered {
        BorderlessZone::Close => {
            draw_list.add_line(a, b, line_color).thickness(2.0).build();
            draw_list
                .add_line([a[0], b[1]], [b[0], a[1]], line_color)
                .thickness(2.0)
                .build();
        }
        BorderlessZone::Resize => {
            draw_list.add_line([a[0], b[1]], [b[0], a[1]], line_color).build();
            let mid = [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5];
            draw_list.add_line([mid[0], b[1]], [b[0], mid[1]], line_color).build();
        }
        BorderlessZone::Move => {}
    }

    ui.is_mouse_clicked(MouseButton::Left).then_some(hovered)
}
