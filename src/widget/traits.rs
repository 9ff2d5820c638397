//! Widget trait.
//!
//! Widgets own a rectangle of the screen and draw themselves into an
//! [`OutputBuffer`]. They track their own dirty flag so a host only
//! re-renders what changed.

use crate::layout::Rect;
use crate::terminal::OutputBuffer;

/// A UI component that renders into a fixed rectangle.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget.
    ///
    /// The widget must paint every cell of its bounds and nothing outside
    /// them, leaving attributes reset.
    fn render(&self, out: &mut OutputBuffer);

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
