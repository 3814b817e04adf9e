//! UTF-8 helpers for caret handling.

use std::borrow::Cow;

/// Clamp `index` into `s` and move it back onto a char boundary.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// assert_eq!(clamp_to_char_boundary("#€", 2), 1);
/// assert_eq!(clamp_to_char_boundary("#€", 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Byte index of the char boundary before `i` (0 at the start).
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Drop CR/LF, as a single-line text field does with typed or pasted text.
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_boundary_steps_over_multibyte_chars() {
        let s = "a€b";
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 5), 4);
        assert_eq!(prev_cursor_boundary(s, 0), 0);
    }

    #[test]
    fn single_line_filter_borrows_when_clean() {
        assert!(matches!(filter_single_line("#fff"), Cow::Borrowed("#fff")));
        assert_eq!(filter_single_line("#f\r\nff"), "#fff");
    }
}
