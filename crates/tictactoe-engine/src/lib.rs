//! Game model for tic-tac-toe with move history and time travel.
//!
//! - [`core`] holds the board data types and the win evaluator.
//! - [`engine`] holds [`GameState`], the immutable state machine driven by the UI.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a move was rejected by [`GameState::try_apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("game already won by {winner}")]
    GameOver { winner: Mark },
    #[display("cell {index} is already occupied")]
    Occupied { index: CellIndex },
}

/// Returned by [`GameState::jump_to`] for a step that has no history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("step {step} is out of range (history has {len} entries)")]
pub struct StepOutOfRangeError {
    pub step: usize,
    pub len: usize,
}
