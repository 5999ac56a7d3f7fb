//! Theme constants for the Caro GUI

use egui::Color32;

// Board colors - paper grid
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 225);
pub const CELL_BG: Color32 = Color32::from_rgb(252, 249, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(170, 160, 140);
pub const COORD_TEXT: Color32 = Color32::from_rgb(110, 100, 85);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(210, 50, 60);
pub const O_MARK: Color32 = Color32::from_rgb(40, 90, 200);

// Markers
pub const LAST_MOVE_BG: Color32 = Color32::from_rgb(255, 236, 160);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);
pub const HINT_MARKER: Color32 = Color32::from_rgb(255, 170, 30);

pub fn hover_preview(mark_color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(mark_color.r(), mark_color.g(), mark_color.b(), 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Color used to draw `mark`
pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => X_MARK,
        crate::Mark::O => O_MARK,
        crate::Mark::Empty => TEXT_MUTED,
    }
}
