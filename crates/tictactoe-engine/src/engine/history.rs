use crate::core::{Board, Point};

/// A board snapshot and the move that led to it.
///
/// The entry at index `k` of a history always has `move_number == k`; entry 0 is the
/// empty starting board and has no point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    point: Option<Point>,
    move_number: usize,
}

impl HistoryEntry {
    pub const INITIAL: Self = Self {
        board: Board::EMPTY,
        point: None,
        move_number: 0,
    };

    pub(crate) const fn new(board: Board, point: Point, move_number: usize) -> Self {
        Self {
            board,
            point: Some(point),
            move_number,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinate of the mark placed by this move, `None` for the game start.
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        self.point
    }

    #[must_use]
    pub const fn move_number(&self) -> usize {
        self.move_number
    }

    #[must_use]
    pub const fn is_start(&self) -> bool {
        self.move_number == 0
    }

    /// Label of the move-list button that jumps to this entry.
    #[must_use]
    pub fn description(&self) -> String {
        match self.point {
            Some(point) if !self.is_start() => {
                format!("Go to move #{}{point}", self.move_number)
            }
            _ => "Go to game start".to_owned(),
        }
    }
}
