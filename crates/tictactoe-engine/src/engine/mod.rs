//! Game controller: history of board snapshots and the transitions over it.
//!
//! - [`GameState`] - Immutable game state; every transition returns a new value
//! - [`HistoryEntry`] - One board snapshot together with the move that produced it
//! - [`HistoryOrder`] - Display order of the move list
//! - [`Status`] - Status line derived from the current step
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{CellIndex, GameState, Status, Mark};
//!
//! let cell = |i| CellIndex::new(i).unwrap();
//!
//! let state = GameState::new().apply_move(cell(0)).apply_move(cell(4));
//! assert_eq!(state.status(), Status::NextPlayer(Mark::X));
//!
//! // Go back to the first move and branch from there.
//! let state = state.jump_to(1).unwrap().apply_move(cell(8));
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.board().cell(cell(4)).mark(), None);
//! ```

pub use self::{game_state::*, history::*, status::*};

mod game_state;
mod history;
mod status;
