use ratatui::{
    layout::Constraint,
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Block as BlockWidget, Paragraph, Widget},
};
use tictactoe_engine::{Cell, CellIndex, Mark};

use crate::view::widgets::{color, style};

/// Digit hints shown in empty cells, matching the number keys that place a mark there.
const HINTS: [&str; CellIndex::COUNT] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub const fn width() -> u16 {
        7
    }

    pub const fn height() -> u16 {
        3
    }

    pub fn from_cell(index: CellIndex, cell: Cell, is_cursor: bool) -> Self {
        let (style, symbol) = match cell.mark() {
            None => (style::EMPTY, HINTS[index.index()]),
            Some(mark) => {
                let style = match mark {
                    _ if cell.is_winner() => style::WINNER,
                    Mark::X => style::X_MARK,
                    Mark::O => style::O_MARK,
                };
                (style, mark_symbol(mark))
            }
        };
        let style = if is_cursor {
            style.bg(color::DARK_GRAY)
        } else {
            style
        };
        Self::new(style, symbol)
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
}

fn mark_symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "X",
        Mark::O => "O",
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Fill the whole cell so the background covers every row, not just the symbol
        BlockWidget::new().style(self.style).render(area, buf);
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area.centered_vertically(Constraint::Length(1)), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_of(mark: Option<Mark>) -> Cell {
        Cell::new(mark)
    }

    #[test]
    fn test_empty_cell_shows_digit_hint() {
        let index = CellIndex::new(4).unwrap();
        let display = CellDisplay::from_cell(index, Cell::EMPTY, false);
        assert_eq!(display.symbol(), "5");
        assert_eq!(display.style(), style::EMPTY);
    }

    #[test]
    fn test_marks_use_distinct_styles() {
        let index = CellIndex::new(0).unwrap();
        let x = CellDisplay::from_cell(index, cell_of(Some(Mark::X)), false);
        let o = CellDisplay::from_cell(index, cell_of(Some(Mark::O)), false);
        assert_eq!(x.symbol(), "X");
        assert_eq!(o.symbol(), "O");
        assert_ne!(x.style(), o.style());
    }

    #[test]
    fn test_cursor_changes_background() {
        let index = CellIndex::new(0).unwrap();
        let plain = CellDisplay::from_cell(index, Cell::EMPTY, false);
        let cursor = CellDisplay::from_cell(index, Cell::EMPTY, true);
        assert_eq!(cursor.symbol(), plain.symbol());
        assert_ne!(cursor.style().bg, plain.style().bg);
    }

    #[test]
    fn test_render_centers_symbol() {
        let area = Rect::new(0, 0, CellDisplay::width(), CellDisplay::height());
        let mut buf = Buffer::empty(area);
        CellDisplay::new(style::X_MARK, "X").render(area, &mut buf);

        assert_eq!(buf[(3, 1)].symbol(), "X");
        assert_eq!(buf[(0, 0)].bg, style::X_MARK.bg.unwrap());
    }
}
