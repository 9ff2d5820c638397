//! Engine module: the typewriter state machine and its virtual clock.
//!
//! This module contains:
//! - [`Typewriter`]: types, pauses on and deletes a list of phrases
//! - [`TypewriterConfig`]: delays, phrases and loop mode
//! - [`Phase`]: the named states of the machine
//! - [`Frame`]: the `(text, caret, done)` snapshot a host renders
//!
//! The engine has no threads and no callbacks. Hosts either move its
//! clock themselves (tests, game loops, foreign UIs through the C API)
//! or hand it to [`TypewriterActor`](crate::actor::TypewriterActor) to
//! run in real time.

mod config;
mod phase;
mod phrase;
pub mod timer;
mod typewriter;

pub use config::{
    clamp_millis, TypewriterConfig, DEFAULT_BETWEEN_WORDS_DELAY, DEFAULT_DELETING_SPEED,
    DEFAULT_START_DELAY, DEFAULT_TYPING_SPEED,
};
pub use phase::Phase;
pub use phrase::Phrase;
pub use typewriter::{Frame, Typewriter, CARET_BLINK_INTERVAL};
