//! Board rendering and pointer mapping for the Gomoku GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::config::GomokuConfig;
use crate::game::GomokuGame;
use crate::{Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Fixed pixel layout of the board canvas.
///
/// All coordinates are relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub cell_size: f32,
    pub padding: f32,
    pub stone_radius: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::from_config(&GomokuConfig::default())
    }
}

impl BoardGeometry {
    pub fn from_config(config: &GomokuConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            padding: config.padding,
            stone_radius: config.stone_radius,
        }
    }

    /// Distance from the first to the last grid line
    #[inline]
    pub fn grid_extent(&self) -> f32 {
        self.cell_size * (BOARD_SIZE as f32 - 1.0)
    }

    /// Side length of the square canvas
    #[inline]
    pub fn canvas_size(&self) -> f32 {
        self.padding * 2.0 + self.grid_extent()
    }

    /// Map a pointer position to the nearest intersection.
    ///
    /// Accepts points within half a cell of the outer grid lines (inclusive);
    /// anything further out is ignored. Exact midpoints round to even.
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> Option<Pos> {
        let half = (self.cell_size / 2.0).floor();
        let left = self.padding - half;
        let right = self.padding + self.grid_extent() + half;
        let in_band = |v: f32| left <= v && v <= right;
        if !(in_band(x) && in_band(y)) {
            return None;
        }

        let col = ((x - self.padding) / self.cell_size).round_ties_even() as i32;
        let row = ((y - self.padding) / self.cell_size).round_ties_even() as i32;
        Pos::try_new(row, col)
    }

    /// Intersection center for `pos`
    pub fn cell_to_pixel(&self, pos: Pos) -> Pos2 {
        Pos2::new(
            self.padding + pos.col as f32 * self.cell_size,
            self.padding + pos.row as f32 * self.cell_size,
        )
    }
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    geometry: BoardGeometry,
    /// Canvas area from the last frame
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(BoardGeometry::default())
    }
}

impl BoardView {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            board_rect: Rect::NOTHING,
        }
    }

    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, game: &GomokuGame) -> Option<Pos> {
        let size = self.geometry.canvas_size();
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, game);

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = game.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if game.is_game_over() {
            return None;
        }

        // Hover preview on empty cells
        if let Some(pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
            if game.board().is_empty(pos) {
                self.draw_hover_preview(&painter, pos, game.current_player());
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let start = self.geometry.padding;
        let end = start + self.geometry.grid_extent();

        for i in 0..BOARD_SIZE {
            let offset = start + i as f32 * self.geometry.cell_size;

            // Horizontal line
            painter.line_segment(
                [self.to_screen(Pos2::new(start, offset)), self.to_screen(Pos2::new(end, offset))],
                stroke,
            );

            // Vertical line
            painter.line_segment(
                [self.to_screen(Pos2::new(offset, start)), self.to_screen(Pos2::new(offset, end))],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            painter.circle_filled(self.board_to_screen(Pos::new(row, col)), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    fn draw_stones(&self, painter: &Painter, game: &GomokuGame) {
        let board = game.board();
        for stone in [Stone::Black, Stone::White] {
            if let Some(bits) = board.stones(stone) {
                for pos in bits.iter_ones() {
                    self.draw_stone(painter, pos, stone);
                }
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let fill = match stone {
            Stone::Black => BLACK_STONE,
            Stone::White => WHITE_STONE,
            Stone::Empty => return,
        };
        painter.circle(
            self.board_to_screen(pos),
            self.geometry.stone_radius,
            fill,
            Stroke::new(STONE_OUTLINE_WIDTH, STONE_OUTLINE),
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            painter.line_segment([self.board_to_screen(first), self.board_to_screen(last)], stroke);
        }

        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), self.geometry.stone_radius + 2.0, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => hover_black(),
            Stone::White => hover_white(),
            Stone::Empty => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.geometry.stone_radius, color);
    }

    #[inline]
    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.board_rect.min + local.to_vec2()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let local = screen_pos - self.board_rect.min;
        self.geometry.pixel_to_cell(local.x, local.y)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.to_screen(self.geometry.cell_to_pixel(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::default()
    }

    #[test]
    fn test_default_canvas_size() {
        assert_eq!(geometry().canvas_size(), 496.0);
    }

    #[test]
    fn test_intersections_map_to_themselves() {
        let g = geometry();
        for (row, col) in [(0, 0), (7, 7), (14, 14), (3, 11)] {
            let pos = Pos::new(row, col);
            let p = g.cell_to_pixel(pos);
            assert_eq!(g.pixel_to_cell(p.x, p.y), Some(pos));
        }
    }

    #[test]
    fn test_rounds_to_nearest_intersection() {
        let g = geometry();
        // (24 + 32*7 + 10, 24 + 32*3 - 15)
        assert_eq!(g.pixel_to_cell(258.0, 105.0), Some(Pos::new(3, 7)));
        assert_eq!(g.pixel_to_cell(24.0 + 17.0, 24.0), Some(Pos::new(0, 1)));
        assert_eq!(g.pixel_to_cell(24.0 + 15.0, 24.0), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_midpoints_round_to_even() {
        let g = geometry();
        // 0.5 cells -> 0, 1.5 cells -> 2
        assert_eq!(g.pixel_to_cell(40.0, 24.0), Some(Pos::new(0, 0)));
        assert_eq!(g.pixel_to_cell(72.0, 24.0), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let g = geometry();
        assert_eq!(g.pixel_to_cell(8.0, 8.0), Some(Pos::new(0, 0)));
        assert_eq!(g.pixel_to_cell(488.0, 488.0), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_outside_band_ignored() {
        let g = geometry();
        assert_eq!(g.pixel_to_cell(7.9, 24.0), None);
        assert_eq!(g.pixel_to_cell(24.0, 7.9), None);
        assert_eq!(g.pixel_to_cell(488.5, 100.0), None);
        assert_eq!(g.pixel_to_cell(100.0, 495.0), None);
        assert_eq!(g.pixel_to_cell(-5.0, -5.0), None);
    }

    #[test]
    fn test_custom_geometry() {
        let config = GomokuConfig {
            cell_size: 40.0,
            padding: 30.0,
            stone_radius: 16.0,
            ..Default::default()
        };
        let g = BoardGeometry::from_config(&config);
        assert_eq!(g.canvas_size(), 30.0 * 2.0 + 40.0 * 14.0);
        assert_eq!(g.pixel_to_cell(30.0 + 40.0 * 2.0, 30.0), Some(Pos::new(0, 2)));
        assert_eq!(g.pixel_to_cell(9.0, 30.0), None);
    }

    #[test]
    fn test_screen_mapping_uses_canvas_origin() {
        let mut view = BoardView::default();
        view.board_rect = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(496.0));
        let pos = Pos::new(5, 9);
        let screen = view.board_to_screen(pos);
        assert_eq!(screen, Pos2::new(100.0 + 24.0 + 9.0 * 32.0, 50.0 + 24.0 + 5.0 * 32.0));
        assert_eq!(view.screen_to_board(screen), Some(pos));
        assert_eq!(view.screen_to_board(Pos2::new(100.0, 50.0)), None);
    }
}
