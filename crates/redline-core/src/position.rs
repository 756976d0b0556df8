//! Line/column document positions.

/// A zero-based position in a text document.
///
/// `column` counts `char`s from the start of the line, not bytes, matching
/// how editors address cursor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character column within the line.
    pub column: usize,
}

impl Position {
    /// Create a position from line and column indices.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Position of the given byte offset within `text`.
///
/// Offsets past the end clamp to the end of the text; an offset inside a
/// multi-byte character floors to that character's start.
#[must_use]
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut clamped = offset.min(text.len());
    while !text.is_char_boundary(clamped) {
        clamped -= 1;
    }
    let before = &text[..clamped];
    let line = before.bytes().filter(|&b| b == b'\n').count();
    let line_start = before.rfind('\n').map_or(0, |at| at + 1);
    Position::new(line, before[line_start..].chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_of_document() {
        assert_eq!(position_at("abc", 0), Position::new(0, 0));
        assert_eq!(position_at("", 0), Position::new(0, 0));
    }

    #[test]
    fn test_within_first_line() {
        assert_eq!(position_at("abc\ndef", 2), Position::new(0, 2));
    }

    #[test]
    fn test_after_newline() {
        assert_eq!(position_at("abc\ndef", 4), Position::new(1, 0));
        assert_eq!(position_at("abc\ndef", 6), Position::new(1, 2));
    }

    #[test]
    fn test_offset_on_newline_byte() {
        assert_eq!(position_at("abc\ndef", 3), Position::new(0, 3));
    }

    #[test]
    fn test_clamps_past_end() {
        assert_eq!(position_at("ab", 99), Position::new(0, 2));
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        // "é" is two bytes; the column after it is 1, not 2.
        let text = "é{++x++}";
        assert_eq!(position_at(text, 2), Position::new(0, 1));
    }

    #[test]
    fn test_ordering_is_document_order() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 5));
    }
}
