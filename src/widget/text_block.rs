//! Text Block Widget: word-wrapped static text.
//!
//! Used for the hero's name, summary and location lines.

use super::text::{display_width, wrap};
use super::traits::Widget;
use crate::layout::Rect;
use crate::style::{Modifiers, Rgb};
use crate::terminal::OutputBuffer;

/// Horizontal alignment of each wrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centred; odd leftover columns go to the right.
    Center,
}

/// A block of wrapped text.
#[derive(Debug)]
pub struct TextBlock {
    text: String,
    bounds: Rect,
    fg: Rgb,
    bg: Option<Rgb>,
    modifiers: Modifiers,
    align: Align,
    dirty: bool,
}

impl TextBlock {
    /// Create a left-aligned white text block.
    pub fn new(bounds: Rect, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounds,
            fg: Rgb::WHITE,
            bg: None,
            modifiers: Modifiers::empty(),
            align: Align::Left,
            dirty: true,
        }
    }

    /// Builder-style foreground color and modifiers.
    #[must_use]
    pub const fn with_style(mut self, fg: Rgb, modifiers: Modifiers) -> Self {
        self.fg = fg;
        self.modifiers = modifiers;
        self
    }

    /// Builder-style alignment.
    #[must_use]
    pub const fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the background color (`None` keeps the terminal's own).
    pub fn set_bg(&mut self, bg: Option<Rgb>) {
        self.bg = bg;
        self.dirty = true;
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// The unwrapped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rows the text needs when wrapped to `width` columns.
    pub fn measure(text: &str, width: u16) -> u16 {
        u16::try_from(wrap(text, width as usize).len()).unwrap_or(u16::MAX)
    }

    /// The wrapped lines for the current bounds.
    pub fn lines(&self) -> Vec<String> {
        wrap(&self.text, self.bounds.width as usize)
    }
}

impl Widget for TextBlock {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, out: &mut OutputBuffer) {
        if self.bounds.is_empty() {
            return;
        }
        let width = self.bounds.width as usize;
        let lines = self.lines();

        for row in 0..self.bounds.height {
            out.cursor_move(self.bounds.x, self.bounds.y.saturating_add(row));
            out.reset_attrs();
            if let Some(bg) = self.bg {
                out.set_bg(bg);
            }

            let Some(line) = lines.get(row as usize) else {
                out.write_spaces(width);
                continue;
            };
            let line_width = display_width(line);
            let left = match self.align {
                Align::Left => 0,
                Align::Center => (width - line_width) / 2,
            };

            out.write_spaces(left);
            out.set_fg(self.fg);
            out.set_modifiers(self.modifiers);
            out.write_str(line);
            out.reset_attrs();
            if let Some(bg) = self.bg {
                out.set_bg(bg);
            }
            out.write_spaces(width - left - line_width);
        }
        out.reset_attrs();
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
