//! Typewriter Line Widget: one row showing typed text and a caret.
//!
//! The caret always occupies a column, drawn blank while it blinks off,
//! so the text never shifts as the caret toggles. When the line is too
//! narrow the head of the text scrolls away and the caret stays in view.

use super::text::{fit_head, fit_tail};
use super::traits::Widget;
use crate::engine::Frame;
use crate::layout::Rect;
use crate::style::{Modifiers, Rgb};
use crate::terminal::OutputBuffer;
use unicode_width::UnicodeWidthChar;

/// Caret glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaretStyle {
    /// Thin vertical bar: │
    #[default]
    Bar,
    /// Full block: █
    Block,
    /// Underscore: _
    Underline,
    /// Any single-column or double-column character.
    Custom(char),
}

impl CaretStyle {
    /// The character drawn for this style.
    pub const fn symbol(self) -> char {
        match self {
            Self::Bar => '│',
            Self::Block => '█',
            Self::Underline => '_',
            Self::Custom(c) => c,
        }
    }

    /// Columns the caret occupies (at least one).
    pub fn width(self) -> usize {
        self.symbol().width().unwrap_or(1).max(1)
    }
}

/// Configuration for the typewriter line.
#[derive(Debug, Clone)]
pub struct TypewriterLineConfig {
    /// Static text shown before the typed text (e.g. "I'm a ").
    pub prefix: String,
    /// Prefix color.
    pub prefix_fg: Rgb,
    /// Typed text color.
    pub fg: Rgb,
    /// Caret color.
    pub caret_fg: Rgb,
    /// Background color; `None` keeps the terminal's own.
    pub bg: Option<Rgb>,
    /// Text modifiers applied to the whole line.
    pub modifiers: Modifiers,
    /// Caret glyph.
    pub caret: CaretStyle,
    /// Stop drawing the caret once the animation is done.
    pub hide_caret_when_done: bool,
}

impl Default for TypewriterLineConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            prefix_fg: Rgb::new(150, 150, 150),
            fg: Rgb::WHITE,
            caret_fg: Rgb::new(0, 200, 100),
            bg: None,
            modifiers: Modifiers::empty(),
            caret: CaretStyle::Bar,
            hide_caret_when_done: false,
        }
    }
}

/// A single-row widget rendering [`Frame`]s.
#[derive(Debug)]
pub struct TypewriterLine {
    /// Last frame received.
    frame: Frame,
    /// Widget bounds (only the first row is used).
    bounds: Rect,
    /// Configuration.
    config: TypewriterLineConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl TypewriterLine {
    /// Create a new line with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, TypewriterLineConfig::default())
    }

    /// Create a new line with custom configuration.
    pub fn with_config(bounds: Rect, config: TypewriterLineConfig) -> Self {
        Self {
            frame: Frame {
                caret_visible: true,
                ..Frame::default()
            },
            bounds,
            config,
            dirty: true,
        }
    }

    /// Take a new frame. Returns `true` if it differs from the last one.
    pub fn update(&mut self, frame: Frame) -> bool {
        if frame == self.frame {
            return false;
        }
        self.frame = frame;
        self.dirty = true;
        true
    }

    /// The frame currently displayed.
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.config.prefix = prefix.into();
        self.dirty = true;
    }

    /// Whether the caret is drawn for the current frame.
    pub const fn caret_shown(&self) -> bool {
        self.frame.caret_visible && !(self.config.hide_caret_when_done && self.frame.done)
    }

    /// Columns the prefix, text and caret need when nothing is cut.
    pub fn natural_width(&self) -> usize {
        super::text::display_width(&self.config.prefix)
            + super::text::display_width(&self.frame.text)
            + self.config.caret.width()
    }
}

impl Widget for TypewriterLine {
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
        let caret_width = self.config.caret.width();

        out.cursor_move(self.bounds.x, self.bounds.y);
        out.reset_attrs();
        if let Some(bg) = self.config.bg {
            out.set_bg(bg);
        }
        out.set_modifiers(self.config.modifiers);

        if width < caret_width {
            out.write_spaces(width);
            out.reset_attrs();
            return;
        }

        let (prefix, prefix_width) = fit_head(&self.config.prefix, width - caret_width);
        out.set_fg(self.config.prefix_fg);
        out.write_str(prefix);

        let (text, text_width) = fit_tail(&self.frame.text, width - caret_width - prefix_width);
        out.set_fg(self.config.fg);
        out.write_str(text);

        if self.caret_shown() {
            out.set_fg(self.config.caret_fg);
            out.write_str(self.config.caret.symbol().encode_utf8(&mut [0; 4]));
        } else {
            out.write_spaces(caret_width);
        }

        out.write_spaces(width - prefix_width - text_width - caret_width);
        out.reset_attrs();
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str, caret_visible: bool, done: bool) -> Frame {
        Frame {
            text: text.to_owned(),
            caret_visible,
            done,
        }
    }

    fn rendered(line: &TypewriterLine) -> String {
        let mut out = OutputBuffer::new();
        line.render(&mut out);
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    /// Strip escape sequences, leaving only printed text.
    fn visible(ansi: &str) -> String {
        let mut text = String::new();
        let mut chars = ansi.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                text.push(c);
            }
        }
        text
    }

    #[test]
    fn test_update_tracks_changes() {
        let mut line = TypewriterLine::new(Rect::new(0, 0, 20, 1));
        line.clear_redraw();

        assert!(!line.update(frame("", true, false)));
        assert!(!line.needs_redraw());

        assert!(line.update(frame("Ho", true, false)));
        assert!(line.needs_redraw());
        assert_eq!(line.frame().text, "Ho");
    }

    #[test]
    fn test_caret_reserves_column() {
        let mut line = TypewriterLine::new(Rect::new(0, 0, 10, 1));

        line.update(frame("Go", true, false));
        assert_eq!(visible(&rendered(&line)), "Go│       ");

        line.update(frame("Go", false, false));
        assert_eq!(visible(&rendered(&line)), "Go        ");
    }

    #[test]
    fn test_prefix_and_position() {
        let config = TypewriterLineConfig {
            prefix: "I'm a ".to_owned(),
            ..TypewriterLineConfig::default()
        };
        let mut line = TypewriterLine::with_config(Rect::new(3, 5, 16, 1), config);
        line.update(frame("Hobbyist", true, false));

        let ansi = rendered(&line);
        assert!(ansi.starts_with("\x1b[6;4H"));
        assert_eq!(visible(&ansi), "I'm a Hobbyist│ ");
        assert_eq!(line.natural_width(), 15);
    }

    #[test]
    fn test_narrow_line_keeps_tail() {
        let mut line = TypewriterLine::new(Rect::new(0, 0, 6, 1));
        line.update(frame("Software Developer", true, false));
        assert_eq!(visible(&rendered(&line)), "loper│");
    }

    #[test]
    fn test_hide_caret_when_done() {
        let config = TypewriterLineConfig {
            hide_caret_when_done: true,
            caret: CaretStyle::Block,
            ..TypewriterLineConfig::default()
        };
        let mut line = TypewriterLine::with_config(Rect::new(0, 0, 5, 1), config);

        line.update(frame("Go", true, false));
        assert_eq!(visible(&rendered(&line)), "Go█  ");

        line.update(frame("Go", true, true));
        assert!(!line.caret_shown());
        assert_eq!(visible(&rendered(&line)), "Go   ");
    }

    #[test]
    fn test_empty_bounds_render_nothing() {
        let line = TypewriterLine::new(Rect::ZERO);
        assert!(rendered(&line).is_empty());
    }
}
