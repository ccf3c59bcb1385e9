//! Helper functions for UI rendering.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Pad or truncate `s` to exactly `width` display columns.
///
/// Truncation appends `…`; padding appends spaces. Width is measured in
/// terminal columns, not chars.
pub fn pad_cell(s: &str, width: usize) -> String {
    let w = s.width();
    if w <= width {
        let mut out = String::with_capacity(s.len() + (width - w));
        out.push_str(s);
        out.extend(std::iter::repeat(' ').take(width - w));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect() {
        let area = Rect::new(0, 0, 10, 6);
        let inner = inner_rect(area, 1);
        assert_eq!(inner, Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn test_inner_rect_saturates_on_tiny_area() {
        let area = Rect::new(0, 0, 1, 1);
        let inner = inner_rect(area, 1);
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn test_pad_cell_pads_short_values() {
        assert_eq!(pad_cell("abc", 6), "abc   ");
        assert_eq!(pad_cell("", 3), "   ");
    }

    #[test]
    fn test_pad_cell_truncates_long_values() {
        let out = pad_cell("a long table cell", 8);
        assert_eq!(out.chars().count(), 8);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_pad_cell_exact_fit() {
        assert_eq!(pad_cell("abcdef", 6), "abcdef");
    }
}
