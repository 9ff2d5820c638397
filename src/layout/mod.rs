//! Layout module: rectangles for placing widgets.
//!
//! Layout is computed once at start-up and again on terminal resize;
//! widgets only ever see their own [`Rect`].

mod rect;

pub use rect::Rect;
