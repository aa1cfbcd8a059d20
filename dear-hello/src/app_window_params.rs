use crate::geometry::WindowGeometry;

/// Margins inside which content should not be drawn (e.g. a phone notch).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Typically around 47 on a notched phone
    pub top: f64,
    pub left: f64,
    /// Typically around 34 on a notched phone
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0
    }

    /// Shrinks the rectangle `pos`/`size` by the insets. The size never goes negative.
    pub fn inset_rect(&self, pos: [f32; 2], size: [f32; 2]) -> ([f32; 2], [f32; 2]) {
        let (top, left, bottom, right) = (
            self.top as f32,
            self.left as f32,
            self.bottom as f32,
            self.right as f32,
        );
        (
            [pos[0] + left, pos[1] + top],
            [
                (size[0] - left - right).max(0.0),
                (size[1] - top - bottom).max(0.0),
            ],
        )
    }
}

/// Application window display parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AppWindowParams {
    pub window_title: String,
    /// On mobile targets the window is always full screen.
    pub window_geometry: WindowGeometry,
    /// Save the geometry on exit and restore it on the next run.
    pub restore_previous_geometry: bool,
    /// Taken into account at creation.
    pub resizable: bool,
    /// Taken into account dynamically. Full screen windows cannot be hidden.
    pub hidden: bool,
    /// Taken into account at creation.
    pub borderless: bool,
    /// Show a drag zone at the top of a borderless window.
    pub borderless_movable: bool,
    /// Show a resize grip at the bottom-right of a borderless window.
    pub borderless_resizable: bool,
    /// Show a close button at the top-right of a borderless window.
    pub borderless_closable: bool,
    /// Colour of the borderless drag/resize/close zones. An alpha of 0 selects
    /// the style's `TitleBgActive` colour at 0.6 opacity.
    pub borderless_highlight_color: [f32; 4],
    /// Out values, filled on platforms that report a safe area.
    pub edge_insets: EdgeInsets,
    pub handle_edge_insets: bool,
}

impl Default for AppWindowParams {
    fn default() -> Self {
        Self {
            window_title: String::new(),
            window_geometry: WindowGeometry::default(),
            restore_previous_geometry: false,
            resizable: true,
            hidden: false,
            borderless: false,
            borderless_movable: true,
            borderless_resizable: true,
            borderless_closable: true,
            borderless_highlight_color: [0.2, 0.4, 1.0, 0.3],
            edge_insets: EdgeInsets::default(),
            handle_edge_insets: true,
        }
    }
}

impl AppWindowParams {
    pub fn effective_highlight_color(&self, title_bg_active: [f32; 4]) -> [f32; 4] {
        if self.borderless_highlight_color[3] == 0.0 {
            [
                title_bg_active[0],
                title_bg_active[1],
                title_bg_active[2],
                0.6,
            ]
        } else {
            self.borderless_highlight_color
        }
    }

    /// Whether the window may be hidden right now.
    pub fn can_hide(&self) -> bool {
        !self.window_geometry.full_screen_mode.is_full_screen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = AppWindowParams::default();
        assert_eq!(p.window_title, "");
        assert_eq!(p.window_geometry, WindowGeometry::default());
        assert!(!p.restore_previous_geometry);
        assert!(p.resizable);
        assert!(!p.hidden);
        assert!(!p.borderless);
        assert!(p.borderless_movable);
        assert!(p.borderless_resizable);
        assert!(p.borderless_closable);
        assert_eq!(p.borderless_highlight_color, [0.2, 0.4, 1.0, 0.3]);
        assert_eq!(p.edge_insets, EdgeInsets::default());
        assert!(p.handle_edge_insets);
    }

    #[test]
    fn edge_insets_default_to_zero() {
        let e = EdgeInsets::default();
        assert!(e.is_zero());
        assert_eq!(e.inset_rect([0.0, 0.0], [390.0, 844.0]), ([0.0, 0.0], [390.0, 844.0]));
    }

    #[test]
    fn notch_insets_shrink_the_content_rect() {
        let e = EdgeInsets {
            top: 47.0,
            bottom: 34.0,
            ..Default::default()
        };
        let (pos, size) = e.inset_rect([0.0, 0.0], [390.0, 844.0]);
        assert_eq!(pos, [0.0, 47.0]);
        assert_eq!(size, [390.0, 763.0]);
    }

    #[test]
    fn oversized_insets_clamp_to_empty() {
        let e = EdgeInsets {
            left: 300.0,
            right: 300.0,
            ..Default::default()
        };
        let (_, size) = e.inset_rect([10.0, 10.0], [400.0, 300.0]);
        assert_eq!(size, [0.0, 300.0]);
    }

    #[test]
    fn transparent_highlight_falls_back_to_title_color() {
        let mut p = AppWindowParams::default();
        assert_eq!(
            p.effective_highlight_color([0.1, 0.1, 0.1, 1.0]),
            [0.2, 0.4, 1.0, 0.3]
        );

        p.borderless_highlight_color = [0.2, 0.4, 1.0, 0.0];
        assert_eq!(
            p.effective_highlight_color([0.16, 0.29, 0.48, 1.0]),
            [0.16, 0.29, 0.48, 0.6]
        );
    }

    #[test]
    fn full_screen_windows_cannot_hide() {
        let mut p = AppWindowParams::default();
        assert!(p.can_hide());
        p.window_geometry.full_screen_mode = crate::geometry::FullScreenMode::FullMonitorWorkArea;
        assert!(!p.can_hide());
    }
}
