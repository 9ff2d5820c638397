//! Display-width helpers shared by the widgets.
//!
//! Widths are terminal columns (wide CJK graphemes count as two), and
//! cuts always fall on grapheme boundaries.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `width` columns, with its width.
pub fn fit_head(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    let mut end = 0;
    for (start, grapheme) in text.grapheme_indices(true) {
        let w = display_width(grapheme);
        if used + w > width {
            break;
        }
        used += w;
        end = start + grapheme.len();
    }
    (&text[..end], used)
}

/// Longest suffix of `text` that fits in `width` columns, with its width.
pub fn fit_tail(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    let mut start = text.len();
    for (index, grapheme) in text.grapheme_indices(true).rev() {
        let w = display_width(grapheme);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    (&text[start..], used)
}

/// Greedy word wrap to `width` columns.
///
/// Runs of whitespace collapse to a single space, explicit newlines start
/// a new line, and words wider than a line are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_width = display_width(word);

            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            while word_width > width {
                let (head, head_width) = fit_head(word, width);
                if head.is_empty() {
                    // A single grapheme wider than the line; nothing fits.
                    break;
                }
                lines.push(head.to_owned());
                word = &word[head.len()..];
                word_width -= head_width;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            }
        }
        lines.push(line);
    }
    lines
}
