//! Board rendering for the Reversi GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::layout;
use super::theme::*;
use crate::{Board, Player, Pos, Stone, BOARD_SIZE};

/// What the board view needs to know besides the discs
pub struct BoardOverlay<'a> {
    /// Side whose legal moves are shown; `None` hides hints and disables clicks
    pub to_move: Option<Player>,
    pub legal_moves: &'a [Pos],
    pub last_move: Option<Pos>,
    pub flipped: &'a [Pos],
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Preferred cell size from the configuration
    preferred_cell_size: f32,
    /// Cell size actually used this frame
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl BoardView {
    pub fn new(cell_size: f32) -> Self {
        Self {
            preferred_cell_size: cell_size,
            cell_size,
            board_rect: Rect::NOTHING,
        }
    }

    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available = ui.available_size();
        self.cell_size = layout::fit_cell_size(self.preferred_cell_size, available.x.min(available.y));
        let extent = layout::board_extent(self.cell_size);

        let (response, painter) = ui.allocate_painter(Vec2::splat(extent), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_grid(&painter);
        self.draw_discs(&painter, board);

        for &pos in overlay.flipped {
            self.draw_flip_ring(&painter, pos);
        }
        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let player = overlay.to_move?;
        for &pos in overlay.legal_moves {
            let (x, y) = layout::cell_center(pos, self.cell_size);
            painter.circle_filled(self.to_screen(x, y), LEGAL_MARKER_RADIUS, legal_marker());
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|pos| overlay.legal_moves.contains(pos));
        if let Some(pos) = hovered {
            self.draw_hover_preview(&painter, pos, player);
        }

        if response.clicked() {
            return response.interact_pointer_pos().and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Draw the 8x8 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = layout::board_extent(self.cell_size);

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment([self.to_screen(offset, 0.0), self.to_screen(offset, extent)], stroke);

            // Horizontal line
            painter.line_segment([self.to_screen(0.0, offset), self.to_screen(extent, offset)], stroke);
        }
    }

    /// Draw all placed discs
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in board.black.iter_ones().chain(board.white.iter_ones()) {
            self.draw_disc(painter, pos, board.get(pos));
        }
    }

    fn disc_radius(&self) -> f32 {
        self.cell_size * (0.5 - DISC_INSET_RATIO)
    }

    /// Draw a single disc
    fn draw_disc(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let (x, y) = layout::cell_center(pos, self.cell_size);
        let center = self.to_screen(x, y);
        let radius = self.disc_radius();

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(center, radius, Stroke::new(1.0, DISC_OUTLINE));
            }
            Stone::Empty => {}
        }
    }

    fn draw_flip_ring(&self, painter: &Painter, pos: Pos) {
        let (x, y) = layout::cell_center(pos, self.cell_size);
        painter.circle_stroke(self.to_screen(x, y), self.disc_radius() + 1.5, Stroke::new(2.0, FLIP_RING));
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let (x, y) = layout::cell_center(pos, self.cell_size);
        painter.circle_filled(self.to_screen(x, y), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, player: Player) {
        let (x, y) = layout::cell_center(pos, self.cell_size);
        painter.circle_filled(
            self.to_screen(x, y),
            self.disc_radius(),
            hover_preview(player == Player::Black),
        );
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        layout::pointer_to_cell(relative.x, relative.y, self.cell_size)
    }

    fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        self.board_rect.min + Vec2::new(x, y)
    }
}
