pub use self::{board::*, cell::*, line::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod line;
