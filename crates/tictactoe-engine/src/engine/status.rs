use crate::core::Mark;

/// Status line shown next to the board.
///
/// Derived from the current step on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Status {
    #[display("Winner: {_0}")]
    Winner(Mark),
    #[display("Draw")]
    Draw,
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }
}
