use tracing::{debug, info};

use crate::{
    MoveError, StepOutOfRangeError,
    core::{Board, CellIndex, Mark, Win},
};

use super::{HistoryEntry, Status};

/// Step at which the status line reports a draw when nobody has won.
///
/// The check is by step number, not by board occupancy.
pub const DRAW_STEP: usize = CellIndex::COUNT;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum HistoryOrder {
    #[default]
    Ascending,
    Descending,
}

impl HistoryOrder {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }
}

/// Complete game state: history of snapshots, current step, turn and list order.
///
/// `GameState` is a value. Transitions ([`apply_move`], [`jump_to`], [`toggle_order`])
/// borrow the current state and return the next one, leaving the original untouched.
///
/// Invariants:
///
/// - `history[0]` is the empty board, and `history[k].move_number() == k`
/// - `step` is always a valid index into `history`
/// - X moves on even steps, O on odd steps
///
/// [`apply_move`]: Self::apply_move
/// [`jump_to`]: Self::jump_to
/// [`toggle_order`]: Self::toggle_order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
    order: HistoryOrder,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::INITIAL],
            step: 0,
            x_is_next: true,
            order: HistoryOrder::Ascending,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub const fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    #[must_use]
    pub const fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    #[must_use]
    pub const fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Returns the history entry at the current step.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Win> {
        self.board().winner()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.mark())
        } else if self.step == DRAW_STEP {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }

    /// Iterates over the history in display order.
    pub fn moves(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        let len = self.history.len();
        let descending = self.order.is_descending();
        (0..len).map(move |i| &self.history[if descending { len - 1 - i } else { i }])
    }

    /// Places the next player's mark at `index`.
    ///
    /// Fails if the current step already has a winner or the cell is occupied. On
    /// success, every entry after the current step is discarded before the new one is
    /// appended, the list order resets to ascending and the turn passes.
    pub fn try_apply_move(&self, index: CellIndex) -> Result<Self, MoveError> {
        let current = self.current();
        if let Some(win) = current.board().winner() {
            return Err(MoveError::GameOver {
                winner: win.mark(),
            });
        }
        if !current.board().cell(index).is_empty() {
            return Err(MoveError::Occupied { index });
        }

        let mark = self.next_mark();
        let mut history = self.history[..=self.step].to_vec();
        let mut board = current.board().clone();
        board.place(index, mark);
        let move_number = history.len();
        if let Some(win) = board.winner() {
            board.highlight(win.line());
            info!(%mark, move_number, "game won");
        } else if move_number == DRAW_STEP {
            info!(move_number, "game drawn");
        }
        history.push(HistoryEntry::new(board, index.point(), move_number));

        Ok(Self {
            history,
            step: move_number,
            x_is_next: !self.x_is_next,
            order: HistoryOrder::Ascending,
        })
    }

    /// Like [`try_apply_move`](Self::try_apply_move), but an illegal move leaves the
    /// state unchanged.
    #[must_use]
    pub fn apply_move(&self, index: CellIndex) -> Self {
        match self.try_apply_move(index) {
            Ok(state) => state,
            Err(error) => {
                debug!(%index, %error, "move ignored");
                self.clone()
            }
        }
    }

    /// Moves the current step to `step`, keeping the history intact.
    ///
    /// The turn is derived from the step parity: X plays next on even steps.
    pub fn jump_to(&self, step: usize) -> Result<Self, StepOutOfRangeError> {
        if step >= self.history.len() {
            return Err(StepOutOfRangeError {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.step, to = step, "jump");
        Ok(Self {
            step,
            x_is_next: step % 2 == 0,
            ..self.clone()
        })
    }

    /// Flips the display order of the move list.
    #[must_use]
    pub fn toggle_order(&self) -> Self {
        Self {
            order: self.order.toggled(),
            ..self.clone()
        }
    }
}
