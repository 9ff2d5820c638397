//! # Typewriter Hero
//!
//! A typewriter text animation engine for terminal landing screens.
//!
//! The engine types a phrase one grapheme at a time, pauses, deletes it and
//! moves on to the next, while a caret blinks on its own schedule. It runs
//! on a virtual clock, so every frame is reproducible in tests and the same
//! engine can be driven by a game loop, a C host or a real-time thread.
//!
//! ## Core Concepts
//!
//! - **Virtual time**: hosts move the clock with [`Typewriter::advance`]; nothing sleeps
//! - **Frames**: each change yields a `(text, caret_visible, done)` [`Frame`]
//! - **Actor model**: [`TypewriterActor`] runs an engine on its own thread
//! - **Widgets**: [`widget::TypewriterLine`] and friends render frames with ANSI output
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use typewriter::{Typewriter, TypewriterConfig};
//!
//! let config = TypewriterConfig::new(["Go", "Rust"]).with_loop(false);
//! let mut typewriter = Typewriter::new(config);
//!
//! // Start delay (400ms) plus two characters at 70ms each.
//! typewriter.advance(Duration::from_millis(540));
//! assert_eq!(typewriter.text(), "Go");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod layout;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::TypewriterActor;
pub use engine::{Frame, Phase, Typewriter, TypewriterConfig, CARET_BLINK_INTERVAL};
pub use error::{Error, Result};
pub use layout::Rect;
pub use style::{Modifiers, Rgb};
pub use terminal::{InputEvent, KeyCode, KeyModifiers, OutputBuffer, Terminal};
pub use widget::{StatusBar, TextBlock, TypewriterLine, Widget};
