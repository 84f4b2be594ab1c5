//! Theme constants for the Reversi GUI

use egui::Color32;

// Board colors - felt table
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 128, 0);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);

// Disc colors
pub const BLACK_DISC: Color32 = Color32::from_rgb(20, 20, 22);
pub const BLACK_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_DISC: Color32 = Color32::from_rgb(250, 250, 252);
pub const DISC_OUTLINE: Color32 = Color32::from_rgb(0, 0, 0);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const FLIP_RING: Color32 = Color32::from_rgb(255, 200, 60);

// Functions for colors that can't be const
pub fn legal_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_preview(is_black: bool) -> Color32 {
    if is_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 110)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 130)
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const NOTICE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WAITING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_OVER: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const SIDE_PANEL_WIDTH: f32 = 240.0;
/// Gap between a disc and its cell border, as a fraction of the cell
pub const DISC_INSET_RATIO: f32 = 5.0 / 60.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LEGAL_MARKER_RADIUS: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
