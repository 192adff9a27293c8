//! Terminal shell for the InterVu client. One screen per view, an
//! exhaustive router over the view enumeration, and a tick-driven event
//! loop that drains the async tasks a screen may have in flight.

mod backend;
mod chrome;
mod runtime;
mod screens;
mod shell;
mod tasks;

pub use backend::SessionBackend;
pub use runtime::Ui;
pub use shell::{handle_key_press, ShellState};
