pub use self::{game::*, help::*};

mod game;
mod help;
