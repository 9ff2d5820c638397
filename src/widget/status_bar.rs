//! Status Bar Widget: Three-section status bar.
//!
//! A horizontal status bar with left, center, and right sections.
//! The hero uses it for the phase readout and key hints.

use super::text::fit_head;
use super::traits::Widget;
use crate::layout::Rect;
use crate::style::Rgb;
use crate::terminal::OutputBuffer;

/// Configuration for the status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Left section text color.
    pub left_fg: Rgb,
    /// Center section text color.
    pub center_fg: Rgb,
    /// Right section text color.
    pub right_fg: Rgb,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(40, 40, 40),
            left_fg: Rgb::WHITE,
            center_fg: Rgb::new(150, 150, 150),
            right_fg: Rgb::new(100, 200, 100),
        }
    }
}

/// A three-section status bar (left, center, right).
#[derive(Debug)]
pub struct StatusBar {
    /// Left section content.
    left: String,
    /// Center section content.
    center: String,
    /// Right section content.
    right: String,
    /// Widget bounds.
    bounds: Rect,
    /// Configuration.
    config: StatusBarConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl StatusBar {
    /// Create a new status bar with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, StatusBarConfig::default())
    }

    /// Create a new status bar with custom configuration.
    pub const fn with_config(bounds: Rect, config: StatusBarConfig) -> Self {
        Self {
            left: String::new(),
            center: String::new(),
            right: String::new(),
            bounds,
            config,
            dirty: true,
        }
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        Self::replace(&mut self.left, text.into(), &mut self.dirty);
    }

    /// Set the center section content.
    pub fn set_center(&mut self, text: impl Into<String>) {
        Self::replace(&mut self.center, text.into(), &mut self.dirty);
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        Self::replace(&mut self.right, text.into(), &mut self.dirty);
    }

    /// Set all sections at once.
    pub fn set_all(
        &mut self,
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
    ) {
        self.set_left(left);
        self.set_center(center);
        self.set_right(right);
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the center section content.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }

    // Only an actual change dirties the bar; the hero sets sections every frame.
    fn replace(slot: &mut String, text: String, dirty: &mut bool) {
        if *slot != text {
            *slot = text;
            *dirty = true;
        }
    }
}

impl Widget for StatusBar {
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
        let section = width / 3;

        let (left, left_width) = fit_head(&self.left, section);
        let (center, center_width) = fit_head(&self.center, section);
        let (right, right_width) = fit_head(&self.right, section);

        let center_start = ((width - center_width) / 2).max(left_width);
        let right_start = (width - right_width).max(center_start + center_width);

        out.cursor_move(self.bounds.x, self.bounds.y);
        out.reset_attrs();
        out.set_bg(self.config.bg);

        out.set_fg(self.config.left_fg);
        out.write_str(left);
        out.write_spaces(center_start - left_width);

        out.set_fg(self.config.center_fg);
        out.write_str(center);
        out.write_spaces(right_start - center_start - center_width);

        out.set_fg(self.config.right_fg);
        out.write_str(right);
        out.write_spaces(width.saturating_sub(right_start + right_width));

        out.reset_attrs();
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
