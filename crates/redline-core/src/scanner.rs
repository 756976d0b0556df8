//! Literal scanning for annotation spans.
//!
//! [`match_at`] is the canonical matching primitive: it decides, for a
//! single position, whether an annotation starts there. Higher layers add
//! their own traversal on top (the renderer walks paragraph chunks, the
//! navigation index walks the whole document via [`find_from`]).

use crate::kind::{AnnotationKind, SUBSTITUTION_SEPARATOR};

/// Inner text captured by a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchContent<'a> {
    /// Single content span (addition, deletion, comment, highlight).
    Single(&'a str),
    /// Substitution spans, split at the first `~>` separator.
    Replacement { old: &'a str, new: &'a str },
}

/// A recognized annotation span in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationMatch<'a> {
    /// Which of the five patterns matched.
    pub kind: AnnotationKind,
    /// Byte offset of the opening `{`.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Captured inner text, excluding all delimiters.
    pub content: MatchContent<'a>,
}

impl AnnotationMatch<'_> {
    /// Total length of the matched span in bytes, delimiters included.
    #[must_use]
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}

/// Try to match an annotation starting exactly at `pos`.
///
/// Returns `None` when no pattern starts there. The search for the closing
/// delimiter is an unbounded forward literal search: the first occurrence
/// wins, so same-kind nesting is not balanced and an unterminated pattern
/// degrades to literal text at the caller's discretion. A substitution
/// whose inner text lacks the `~>` separator is rejected the same way.
///
/// `pos` must lie on a char boundary of `source`.
#[must_use]
pub fn match_at(source: &str, pos: usize) -> Option<AnnotationMatch<'_>> {
    let bytes = source.as_bytes();
    if pos + 3 > bytes.len() || bytes[pos] != b'{' {
        return None;
    }
    let kind = AnnotationKind::from_sigil(bytes[pos + 1])?;
    if bytes[pos + 2] != bytes[pos + 1] {
        return None;
    }

    let inner_start = pos + 3;
    let close = kind.close_delim();
    let close_at = inner_start + source[inner_start..].find(close)?;
    let inner = &source[inner_start..close_at];

    let content = match kind {
        AnnotationKind::Substitution => {
            let sep = inner.find(SUBSTITUTION_SEPARATOR)?;
            MatchContent::Replacement {
                old: &inner[..sep],
                new: &inner[sep + SUBSTITUTION_SEPARATOR.len()..],
            }
        }
        _ => MatchContent::Single(inner),
    };

    Some(AnnotationMatch {
        kind,
        start: pos,
        end: close_at + close.len(),
        content,
    })
}

/// Find the first annotation starting at or after `from`.
///
/// Scans forward over candidate `{` bytes, applying [`match_at`] to each.
/// `from` must lie on a char boundary of `source`.
#[must_use]
pub fn find_from(source: &str, from: usize) -> Option<AnnotationMatch<'_>> {
    let mut pos = from;
    while pos < source.len() {
        let at = pos + source[pos..].find('{')?;
        if let Some(found) = match_at(source, at) {
            return Some(found);
        }
        pos = at + 1;
    }
    None
}
