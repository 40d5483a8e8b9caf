use super::{
    cell::{BOARD_SIDE, Cell, CellIndex, Mark},
    line::{self, Line, Win},
};

/// The 3×3 grid, stored row-major.
///
/// Boards are snapshots: once a cell is marked it is never cleared, a new move produces
/// a new board in the history instead.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{Board, CellIndex, Mark};
///
/// let x = Some(Mark::X);
/// let board = Board::from_marks([x, None, None, None, x, None, None, None, x]);
/// let win = board.winner().unwrap();
///
/// assert_eq!(win.mark(), Mark::X);
/// assert!(win.line().contains(CellIndex::new(4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CellIndex::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::EMPTY; CellIndex::COUNT],
    };

    /// Builds a board from raw marks, with no winner highlighting.
    #[must_use]
    pub fn from_marks(marks: [Option<Mark>; CellIndex::COUNT]) -> Self {
        Self {
            cells: marks.map(Cell::new),
        }
    }

    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index.index()]
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        CellIndex::all().zip(self.cells.iter().copied())
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_SIDE)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Evaluates the board and returns the first completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Win> {
        line::find_win(self)
    }

    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) {
        let cell = &mut self.cells[index.index()];
        debug_assert!(cell.is_empty(), "cell {index} is already occupied");
        *cell = Cell::new(Some(mark));
    }

    pub(crate) fn highlight(&mut self, line: Line) {
        for index in line.cells() {
            self.cells[index.index()].set_winner();
        }
    }
}
