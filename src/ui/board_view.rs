//! Board rendering for the Caro GUI

use crate::{Board, Mark, Pos, WinLine};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to know about the game besides the marks
pub struct BoardOverlay<'a> {
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a WinLine>,
    /// Clicks and hover preview are disabled
    pub locked: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area, without the coordinate margin
    grid_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            grid_rect: Rect::NOTHING,
            size: crate::board::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let side = (available_size.x.min(available_size.y) - 20.0).max(120.0);

        self.size = board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * self.size as f32),
        );

        painter.rect_filled(self.grid_rect, CornerRadius::ZERO, CELL_BG);
        if let Some(pos) = overlay.last_move {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, LAST_MOVE_BG);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        let mut clicked_pos = None;

        if !overlay.locked {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(pos) {
                        let color = hover_preview(mark_color(overlay.current_turn));
                        self.draw_mark(&painter, pos, overlay.current_turn, color);

                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Cell borders, one square per position
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            let x = self.grid_rect.min.x + offset;
            painter.line_segment([Pos2::new(x, self.grid_rect.min.y), Pos2::new(x, self.grid_rect.max.y)], stroke);

            let y = self.grid_rect.min.y + offset;
            painter.line_segment([Pos2::new(self.grid_rect.min.x, y), Pos2::new(self.grid_rect.max.x, y)], stroke);
        }
    }

    /// Row and column indices around the grid
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional((self.cell_size * 0.35).clamp(8.0, 12.0));

        for i in 0..self.size {
            let mid = (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.grid_rect.min.x + mid, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(top, Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);

            let left = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, self.grid_rect.min.y + mid);
            painter.text(left, Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, mark) in board.occupied_cells() {
            self.draw_mark(painter, pos, mark, mark_color(mark));
        }
    }

    /// X as two crossed strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new((self.cell_size * MARK_STROKE_RATIO).max(1.5), color);

        match mark {
            Mark::X => {
                painter.line_segment([center + Vec2::new(-half, -half), center + Vec2::new(half, half)], stroke);
                painter.line_segment([center + Vec2::new(-half, half), center + Vec2::new(half, -half)], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &WinLine) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pos in &line.cells {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(2.0),
                CornerRadius::same(3),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        if let (Some(first), Some(last)) = (line.cells.first(), line.cells.last()) {
            painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_stroke(center, self.cell_size * 0.4, Stroke::new(2.0, HINT_MARKER));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "?",
            FontId::proportional((self.cell_size * 0.45).max(10.0)),
            HINT_MARKER,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of the cell at `pos`
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
