//! Grid rendering and column picking for the Connect-N GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Coord, Grid, Token};

use super::theme::*;

/// Board view handles rendering and input for the grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area, margin included
    board_rect: Rect,
    columns: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            columns: 0,
        }
    }
}

impl BoardView {
    /// Render the grid and return the clicked column, if it can take a token
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        grid: &Grid,
        current_token: Token,
        last_move: Option<Coord>,
        winning_line: Option<&[Coord]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();
        let (rows, columns) = (grid.rows() as f32, grid.columns() as f32);

        // Largest square cell that fits both dimensions
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / columns)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(8.0);
        self.columns = grid.columns();

        let size = Vec2::new(
            columns * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(10), BOARD_BG);

        let hovered = if accepts_input {
            response.hover_pos().and_then(|p| self.screen_to_column(p))
        } else {
            None
        };
        if let Some(column) = hovered {
            self.draw_column_hover(&painter, grid, column, grid.is_column_open(column));
        }

        self.draw_tokens(&painter, grid);

        let mut clicked = None;
        if let Some(column) = hovered {
            if let Some(coord) = grid.first_open_in_column(column).and_then(|i| grid.to_coord(i)) {
                self.draw_drop_preview(&painter, coord, current_token);
                if response.clicked() {
                    clicked = Some(column);
                }
            }
        }

        if let Some(coord) = last_move {
            painter.circle_filled(self.cell_center(coord), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Hovering the highlighted column needs a fresh frame
        if accepts_input && response.hovered() {
            ui.ctx().request_repaint();
        }

        clicked
    }

    fn draw_column_hover(&self, painter: &Painter, grid: &Grid, column: usize, is_open: bool) {
        let x = self.board_rect.min.x + BOARD_MARGIN + column as f32 * self.cell_size;
        let rect = Rect::from_min_size(
            Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN),
            Vec2::new(self.cell_size, grid.rows() as f32 * self.cell_size),
        );
        let color = if is_open { hover_valid() } else { hover_invalid() };
        painter.rect_filled(rect, CornerRadius::same(6), color);
    }

    /// Translucent token where the next drop would land
    fn draw_drop_preview(&self, painter: &Painter, coord: Coord, token: Token) {
        let Some((fill, _)) = token_colors(token) else {
            return;
        };
        let color = Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 110);
        painter.circle_filled(self.cell_center(coord), self.cell_size * TOKEN_RADIUS_RATIO, color);
    }

    /// Draw every hole, filled or not
    fn draw_tokens(&self, painter: &Painter, grid: &Grid) {
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;

        for cell in grid.iter() {
            let center = self.cell_center(cell.coord());
            match token_colors(cell.token()) {
                None => {
                    painter.circle_filled(center, radius, HOLE_BG);
                }
                Some((fill, highlight)) => {
                    painter.circle_filled(
                        center + Vec2::new(2.0, 2.0),
                        radius,
                        Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                    );
                    painter.circle_filled(center, radius, fill);
                    painter.circle_filled(
                        center + Vec2::new(-radius * 0.3, -radius * 0.3),
                        radius * 0.2,
                        highlight,
                    );
                }
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Coord]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        let radius = self.cell_size * TOKEN_RADIUS_RATIO + 3.0;
        for &coord in line {
            painter.circle_stroke(self.cell_center(coord), radius, stroke);
        }
    }

    /// Column under a screen position
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        column_at(
            screen_pos.x - self.board_rect.min.x - BOARD_MARGIN,
            self.cell_size,
            self.columns,
        )
    }

    /// Center of a cell on screen
    pub fn cell_center(&self, coord: Coord) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (coord.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (coord.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Column containing horizontal offset `x`, measured from the left edge of column 0
fn column_at(x: f32, cell_size: f32, columns: usize) -> Option<usize> {
    if x < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let column = (x / cell_size).floor() as usize;
    (column < columns).then_some(column)
}
