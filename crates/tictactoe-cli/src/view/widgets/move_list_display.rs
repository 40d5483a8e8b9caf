use ratatui::{
    prelude::{Buffer, Rect},
    layout::Position,
    style::Style,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use tictactoe_engine::{CellIndex, GameState};

use crate::view::widgets::style;

/// Numbered list of history entries, one "go to" row per entry.
///
/// Rows follow the state's display order. The row of the current step is bold.
#[derive(Debug)]
pub struct MoveListDisplay<'a> {
    state: &'a GameState,
    selected: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> MoveListDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            selected: None,
            block: None,
        }
    }

    /// Highlights the row at `row` (display position, not move number).
    pub fn selected(self, row: usize) -> Self {
        Self {
            selected: Some(row),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let longest = "10. Go to move #9(2, 2)".len();
        u16::try_from(longest).unwrap_or(u16::MAX)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(CellIndex::COUNT + 1).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Returns the display row under `position`, if it holds an entry.
    pub fn row_at(&self, area: Rect, position: Position) -> Option<usize> {
        let inner = self.block.inner_if_some(area);
        if !inner.contains(position) {
            return None;
        }
        let row = usize::from(position.y - inner.y);
        (row < self.state.history().len()).then_some(row)
    }

    /// Returns the step that the entry at display row `row` jumps to.
    pub fn step_at_row(&self, row: usize) -> Option<usize> {
        self.state.moves().nth(row).map(|entry| entry.move_number())
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.state
            .moves()
            .enumerate()
            .map(|(row, entry)| {
                let mut style = Style::new();
                if entry.move_number() == self.state.step() {
                    style = style.patch(style::CURRENT_MOVE);
                }
                if self.selected == Some(row) {
                    style = style.patch(style::SELECTED_MOVE);
                }
                Line::styled(format!("{:>2}. {}", row + 1, entry.description()), style)
            })
            .collect()
    }
}

impl Widget for MoveListDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &MoveListDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Text::from(self.lines()).render(area, buf);
    }
}
