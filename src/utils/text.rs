//! Display-width helpers for terminal listings

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Collapse whitespace and cut `text` to at most `max_width` columns,
/// ending with an ellipsis when something was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.width() <= max_width {
        return flat;
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
