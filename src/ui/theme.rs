//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const STAR_POINT: Color32 = Color32::from_rgb(40, 30, 20);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const STONE_OUTLINE: Color32 = Color32::from_rgb(0, 0, 0);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 50);

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 90)
}

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 140)
}

// Status bar text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Sizes
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const STONE_OUTLINE_WIDTH: f32 = 1.0;
pub const STAR_POINT_RADIUS: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.5;
pub const WIN_LINE_WIDTH: f32 = 3.0;

// Star point positions (0-indexed) for a 15x15 board
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
