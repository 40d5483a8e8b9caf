use super::{
    board::Board,
    cell::{CellIndex, Mark},
};

/// Three cells in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line([CellIndex; 3]);

const fn line(a: u8, b: u8, c: u8) -> Line {
    Line([
        CellIndex::new_unchecked(a),
        CellIndex::new_unchecked(b),
        CellIndex::new_unchecked(c),
    ])
}

impl Line {
    /// Every winning line, in evaluation order: rows, columns, then diagonals.
    pub const ALL: [Line; 8] = [
        line(0, 1, 2),
        line(3, 4, 5),
        line(6, 7, 8),
        line(0, 3, 6),
        line(1, 4, 7),
        line(2, 5, 8),
        line(0, 4, 8),
        line(2, 4, 6),
    ];

    #[must_use]
    pub const fn cells(self) -> [CellIndex; 3] {
        self.0
    }

    #[must_use]
    pub fn contains(self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }

    /// Returns the mark occupying all three cells, if any.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0.map(|index| board.cell(index).mark());
        a.filter(|mark| b == Some(*mark) && c == Some(*mark))
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    mark: Mark,
    line: Line,
}

impl Win {
    #[must_use]
    pub const fn mark(self) -> Mark {
        self.mark
    }

    #[must_use]
    pub const fn line(self) -> Line {
        self.line
    }
}

/// Returns the first line of [`Line::ALL`] owned by a single mark.
pub(crate) fn find_win(board: &Board) -> Option<Win> {
    Line::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| Win { mark, line }))
}
