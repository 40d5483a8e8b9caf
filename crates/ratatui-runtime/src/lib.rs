//! Event-driven runtime for ratatui applications.
//!
//! The runtime blocks on terminal input and redraws once after every event. There is
//! no tick or frame timer: applications change state only in response to input.

pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
