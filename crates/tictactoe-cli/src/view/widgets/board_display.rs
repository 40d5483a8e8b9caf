use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use tictactoe_engine::{BOARD_SIDE, Board, CellIndex};

use crate::view::widgets::{CellDisplay, style};

/// Gap between neighboring cells, drawn in the grid color.
const GAP: u16 = 1;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<CellIndex>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: CellIndex) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        let side = BOARD_SIDE as u16;
        side * CellDisplay::width() + (side - 1) * GAP
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        let side = BOARD_SIDE as u16;
        side * CellDisplay::height() + (side - 1) * GAP
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Screen areas of the nine cells, in [`CellIndex`] order.
    ///
    /// `area` is the same area the widget is rendered into.
    pub fn cell_areas(&self, area: Rect) -> [Rect; CellIndex::COUNT] {
        let grid = self.grid_area(area);
        let horizontal = Layout::horizontal([Constraint::Length(CellDisplay::width()); BOARD_SIDE])
            .spacing(GAP);
        let vertical =
            Layout::vertical([Constraint::Length(CellDisplay::height()); BOARD_SIDE]).spacing(GAP);

        let mut areas = [Rect::default(); CellIndex::COUNT];
        let cells = grid
            .layout::<BOARD_SIDE>(&vertical)
            .into_iter()
            .flat_map(|row| row.layout::<BOARD_SIDE>(&horizontal));
        for (slot, cell_area) in iter::zip(&mut areas, cells) {
            *slot = cell_area;
        }
        areas
    }

    /// Returns the cell under `position`, if any. Gaps between cells hit nothing.
    pub fn cell_at(&self, area: Rect, position: Position) -> Option<CellIndex> {
        let areas = self.cell_areas(area);
        iter::zip(CellIndex::all(), areas)
            .find(|(_, cell_area)| cell_area.contains(position))
            .map(|(index, _)| index)
    }

    fn grid_area(&self, area: Rect) -> Rect {
        let inner = self.block.inner_if_some(area);
        let width = self.width() - super::block_horizontal_margin(self.block.as_ref());
        let height = self.height() - super::block_vertical_margin(self.block.as_ref());
        inner.layout::<1>(&Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center))[0]
            .layout::<1>(&Layout::vertical([Constraint::Length(height)]).flex(Flex::Center))[0]
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        buf.set_style(self.grid_area(area), style::GRID);

        for ((index, cell), cell_area) in iter::zip(self.board.cells(), self.cell_areas(area)) {
            let is_cursor = self.cursor == Some(index);
            CellDisplay::from_cell(index, cell, is_cursor).render(cell_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use tictactoe_engine::{GameState, Mark};

    use super::*;

    fn cell(index: usize) -> CellIndex {
        CellIndex::new(index).unwrap()
    }

    fn render(display: &BoardDisplay<'_>) -> (Rect, Buffer) {
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        (area, buf)
    }

    fn center(area: Rect) -> Position {
        Position::new(area.x + area.width / 2, area.y + area.height / 2)
    }

    #[test]
    fn test_size_includes_block() {
        let board = Board::EMPTY;
        let plain = BoardDisplay::new(&board);
        assert_eq!(plain.width(), 23);
        assert_eq!(plain.height(), 11);

        let bordered = BoardDisplay::new(&board).block(BlockWidget::bordered());
        assert_eq!(bordered.width(), 25);
        assert_eq!(bordered.height(), 13);
    }

    #[test]
    fn test_cell_areas_are_row_major() {
        let board = Board::EMPTY;
        let display = BoardDisplay::new(&board);
        let area = Rect::new(0, 0, display.width(), display.height());
        let areas = display.cell_areas(area);

        assert_eq!(areas[0], Rect::new(0, 0, 7, 3));
        assert_eq!(areas[1], Rect::new(8, 0, 7, 3));
        assert_eq!(areas[3], Rect::new(0, 4, 7, 3));
        assert_eq!(areas[8], Rect::new(16, 8, 7, 3));
    }

    #[test]
    fn test_cell_at_maps_position_to_index() {
        let board = Board::EMPTY;
        let display = BoardDisplay::new(&board).block(BlockWidget::bordered());
        let area = Rect::new(5, 2, display.width(), display.height());
        let areas = display.cell_areas(area);

        for index in CellIndex::all() {
            let position = center(areas[index.index()]);
            assert_eq!(display.cell_at(area, position), Some(index));
        }
        // border and gaps
        assert_eq!(display.cell_at(area, Position::new(5, 2)), None);
        let gap = Position::new(areas[0].right(), areas[0].y);
        assert_eq!(display.cell_at(area, gap), None);
    }

    #[test]
    fn test_render_marks_and_winner() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |state, i| state.apply_move(cell(i)));
        let display = BoardDisplay::new(state.board());
        let (area, buf) = render(&display);
        let areas = display.cell_areas(area);

        for i in [0, 1, 2] {
            let position = center(areas[i]);
            assert_eq!(buf[position].symbol(), "X");
            assert_eq!(buf[position].style().bg, style::WINNER.bg);
        }
        let o = center(areas[3]);
        assert_eq!(buf[o].symbol(), "O");
        assert_eq!(buf[o].style().fg, style::O_MARK.fg);
        let empty = center(areas[8]);
        assert_eq!(buf[empty].symbol(), "9");
        assert_eq!(state.board().cell(cell(0)).mark(), Some(Mark::X));
    }

    #[test]
    fn test_render_cursor() {
        let board = Board::EMPTY;
        let display = BoardDisplay::new(&board).cursor(cell(4));
        let (area, buf) = render(&display);
        let areas = display.cell_areas(area);

        let cursor_bg = buf[center(areas[4])].style().bg;
        let plain_bg = buf[center(areas[0])].style().bg;
        assert_ne!(cursor_bg, plain_bg);
    }
}
