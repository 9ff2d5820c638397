//! Terminal module: session guard, input events and ANSI output.
//!
//! - [`Terminal`]: raw mode / alternate screen guard with event polling
//! - [`InputEvent`]: keys and resizes translated from crossterm
//! - [`OutputBuffer`]: ANSI sequences accumulated for a single write

mod event;
mod output;
mod session;

pub use event::{InputEvent, KeyCode, KeyModifiers};
pub use output::OutputBuffer;
pub use session::{Terminal, TerminalConfig};
