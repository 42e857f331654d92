//! Styling for grid rendering.
//!
//! Styles are plain [`ContentStyle`] values from crossterm. The default
//! set uses a little color; [`Styles::plain`] produces output with no
//! escape sequences at all, which headless rendering and tests rely on.

use crossterm::style::{Color, ContentStyle, Stylize};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Styles for the grid.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the header row.
    pub header: ContentStyle,
    /// Style for normal cells.
    pub cell: ContentStyle,
    /// Style for the selected row.
    pub selected: ContentStyle,
    /// Style for the expand/collapse marker.
    pub marker: ContentStyle,
    /// Style for placeholder text (loading notice, empty-details line).
    pub placeholder: ContentStyle,
    /// Style for the footer (pager and record count).
    pub footer: ContentStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: ContentStyle::new().bold(),
            cell: ContentStyle::new(),
            selected: ContentStyle::new().bold().with(Color::AnsiValue(212)),
            marker: ContentStyle::new().with(Color::AnsiValue(39)),
            placeholder: ContentStyle::new().dim(),
            footer: ContentStyle::new().dim(),
        }
    }
}

impl Styles {
    /// Styles that add no escape sequences to the output.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            header: ContentStyle::new(),
            cell: ContentStyle::new(),
            selected: ContentStyle::new(),
            marker: ContentStyle::new(),
            placeholder: ContentStyle::new(),
            footer: ContentStyle::new(),
        }
    }
}

/// Applies a style to a piece of text.
#[must_use]
pub fn paint(style: &ContentStyle, text: &str) -> String {
    style.apply(text).to_string()
}

/// Pads or truncates `s` to exactly `width` display cells.
///
/// Truncation is width-aware and ends in an ellipsis.
#[must_use]
pub fn pad_truncate(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    if s.width() <= width {
        let pad = width - s.width();
        return format!("{s}{}", " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{out}{}", " ".repeat(width - used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paint_has_no_escapes() {
        let styles = Styles::plain();
        assert_eq!(paint(&styles.header, "Title"), "Title");
        assert_eq!(paint(&styles.selected, "row"), "row");
    }

    #[test]
    fn test_default_paint_preserves_text() {
        let styles = Styles::default();
        assert!(paint(&styles.header, "Title").contains("Title"));
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_truncate("ab", 5), "ab   ");
        assert_eq!(pad_truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(pad_truncate("hello world", 5), "hell…");
        assert_eq!(pad_truncate("", 3), "   ");
        assert_eq!(pad_truncate("anything", 0), "");
    }

    #[test]
    fn test_wide_chars_truncate_cleanly() {
        // Each CJK char is 2 cells wide; "日本" fills 4 of the 5 cells
        // and the ellipsis takes the last one.
        let out = pad_truncate("日本語テスト", 5);
        assert_eq!(out, "日本…");
        assert_eq!(out.width(), 5);
    }
}
