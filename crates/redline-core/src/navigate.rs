//! Document-wide annotation index for jump-to-next/previous commands.
//!
//! The index is stateless: every call rescans the current document text,
//! since the document may have been edited between calls. It scans the raw
//! buffer, so annotations inside code fences are still navigation targets
//! even though the preview leaves them literal.

use crate::AnnotationKind;
use crate::position::{Position, position_at};
use crate::scanner::find_from;

/// One annotation occurrence, addressed both by byte offset and by
/// line/column position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationRange {
    /// Which pattern matched.
    pub kind: AnnotationKind,
    /// Byte offset of the opening `{`.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Position of `start`.
    pub start_position: Position,
    /// Position of `end`.
    pub end_position: Position,
}

/// All annotations in the document, in document order.
///
/// A single left-to-right scan over the canonical matcher, so the returned
/// ranges are sorted by start offset and never overlap.
#[must_use]
pub fn annotations(document: &str) -> Vec<AnnotationRange> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(m) = find_from(document, pos) {
        found.push(AnnotationRange {
            kind: m.kind,
            start: m.start,
            end: m.end,
            start_position: position_at(document, m.start),
            end_position: position_at(document, m.end),
        });
        pos = m.end;
    }
    found
}

/// First annotation starting strictly after `cursor`, wrapping to the first
/// annotation in the document when the cursor is past them all.
///
/// `None` only when the document contains no annotations.
#[must_use]
pub fn next_annotation(document: &str, cursor: usize) -> Option<AnnotationRange> {
    let all = annotations(document);
    all.iter()
        .find(|range| range.start > cursor)
        .or_else(|| all.first())
        .cloned()
}

/// Last annotation starting strictly before `cursor`, wrapping to the last
/// annotation in the document when the cursor is before them all.
///
/// `None` only when the document contains no annotations.
#[must_use]
pub fn prev_annotation(document: &str, cursor: usize) -> Option<AnnotationRange> {
    let all = annotations(document);
    all.iter()
        .rev()
        .find(|range| range.start < cursor)
        .or_else(|| all.last())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "one {++a++} two\n{--b--} three {==c==}\n";

    #[test]
    fn test_annotations_in_document_order() {
        let all = annotations(DOC);
        let kinds: Vec<_> = all.iter().map(|range| range.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AnnotationKind::Addition,
                AnnotationKind::Deletion,
                AnnotationKind::Highlight,
            ]
        );
        assert!(all.windows(2).all(|pair| pair[0].end <= pair[1].start));
    }

    #[test]
    fn test_positions_match_offsets() {
        let all = annotations(DOC);
        assert_eq!(all[0].start_position, Position::new(0, 4));
        assert_eq!(all[1].start_position, Position::new(1, 0));
        assert_eq!(all[2].start_position, Position::new(1, 14));
    }

    #[test]
    fn test_empty_document_is_noop() {
        assert!(annotations("no markup here").is_empty());
        assert_eq!(next_annotation("plain", 0), None);
        assert_eq!(prev_annotation("plain", 3), None);
    }

    #[test]
    fn test_next_walks_ranges_then_wraps() {
        let all = annotations(DOC);
        let mut cursor = 0;
        let mut visited = Vec::new();
        for _ in 0..all.len() {
            let range = next_annotation(DOC, cursor).unwrap();
            cursor = range.start;
            visited.push(range);
        }
        assert_eq!(visited, all);
        // One more call from the last range wraps to the first.
        assert_eq!(next_annotation(DOC, cursor).unwrap(), all[0]);
    }

    #[test]
    fn test_prev_walks_ranges_reversed_then_wraps() {
        let all = annotations(DOC);
        let mut cursor = DOC.len();
        let mut visited = Vec::new();
        for _ in 0..all.len() {
            let range = prev_annotation(DOC, cursor).unwrap();
            cursor = range.start;
            visited.push(range);
        }
        let reversed: Vec<_> = all.iter().rev().cloned().collect();
        assert_eq!(visited, reversed);
        assert_eq!(prev_annotation(DOC, cursor).unwrap(), *all.last().unwrap());
    }

    #[test]
    fn test_next_is_strictly_after_cursor() {
        let all = annotations(DOC);
        // Cursor exactly on a range start skips to the following range.
        let range = next_annotation(DOC, all[0].start).unwrap();
        assert_eq!(range, all[1]);
    }

    #[test]
    fn test_code_fences_are_still_targets() {
        let doc = "```\n{++in code++}\n```\n";
        let all = annotations(doc);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, AnnotationKind::Addition);
    }

    #[test]
    fn test_multiline_midline_pattern_is_visible() {
        // The preview fragments mid-line multi-line patterns; navigation
        // still finds them because it scans the raw buffer.
        let doc = "text {++spans\n\nlines++} rest";
        let all = annotations(doc);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].start, 5);
        assert_eq!(all[0].end_position.line, 2);
    }
}
