/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 3;

/// A player's mark.
///
/// X always moves first, so X owns the even-numbered history steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Column/row coordinate of a cell, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({col}, {row})")]
pub struct Point {
    pub col: u8,
    pub row: u8,
}

/// Flat row-major index of a board cell, always in `0..9`.
///
/// Index `i` maps to the point `(i % 3, i / 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{_0}")]
pub struct CellIndex(u8);

impl CellIndex {
    pub const COUNT: usize = BOARD_SIDE * BOARD_SIDE;
    pub const CENTER: Self = Self(4);

    pub(crate) const fn new_unchecked(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT);
        Self(index)
    }

    /// Returns the index if it lies on the board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_point(point: Point) -> Option<Self> {
        let side = BOARD_SIDE as u8;
        if point.col < side && point.row < side {
            Some(Self(point.row * side + point.col))
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::new)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn point(self) -> Point {
        let side = BOARD_SIDE as u8;
        Point {
            col: self.0 % side,
            row: self.0 / side,
        }
    }

    #[must_use]
    pub const fn left(self) -> Option<Self> {
        let Point { col, row } = self.point();
        match col.checked_sub(1) {
            Some(col) => Self::from_point(Point { col, row }),
            None => None,
        }
    }

    #[must_use]
    pub const fn right(self) -> Option<Self> {
        let Point { col, row } = self.point();
        Self::from_point(Point { col: col + 1, row })
    }

    #[must_use]
    pub const fn up(self) -> Option<Self> {
        let Point { col, row } = self.point();
        match row.checked_sub(1) {
            Some(row) => Self::from_point(Point { col, row }),
            None => None,
        }
    }

    #[must_use]
    pub const fn down(self) -> Option<Self> {
        let Point { col, row } = self.point();
        Self::from_point(Point { col, row: row + 1 })
    }
}

/// One square of the board.
///
/// `is_winner` is cosmetic: it is set on the three cells of the completed line so the
/// renderer can highlight them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    mark: Option<Mark>,
    is_winner: bool,
}

impl Cell {
    pub const EMPTY: Self = Self {
        mark: None,
        is_winner: false,
    };

    #[must_use]
    pub const fn new(mark: Option<Mark>) -> Self {
        Self {
            mark,
            is_winner: false,
        }
    }

    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        self.mark
    }

    #[must_use]
    pub const fn is_winner(self) -> bool {
        self.is_winner
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mark.is_none()
    }

    pub(crate) const fn set_winner(&mut self) {
        self.is_winner = true;
    }
}
