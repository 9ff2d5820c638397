//! Widgets for a typewriter hero screen.
//!
//! Every widget owns a [`Rect`](crate::layout::Rect) and paints it into an
//! [`OutputBuffer`](crate::terminal::OutputBuffer). A host composes a frame
//! by rendering each widget that [`needs_redraw`](Widget::needs_redraw) into
//! one buffer and presenting it with a single write.
//!
//! # Example
//!
//! ```rust
//! use typewriter::layout::Rect;
//! use typewriter::terminal::OutputBuffer;
//! use typewriter::widget::{TypewriterLine, Widget};
//! use typewriter::Frame;
//!
//! let mut line = TypewriterLine::new(Rect::new(0, 0, 20, 1));
//! line.update(Frame { text: "Hob".into(), caret_visible: true, done: false });
//!
//! let mut out = OutputBuffer::new();
//! line.render(&mut out);
//! line.clear_redraw();
//! assert!(!out.is_empty());
//! ```

mod status_bar;
mod text;
mod text_block;
mod traits;
mod typewriter_line;

pub use status_bar::{StatusBar, StatusBarConfig};
pub use text::{display_width, fit_head, fit_tail, wrap};
pub use text_block::{Align, TextBlock};
pub use traits::Widget;
pub use typewriter_line::{CaretStyle, TypewriterLine, TypewriterLineConfig};
