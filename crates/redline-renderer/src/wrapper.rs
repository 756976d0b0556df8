//! Wrapper tag emission.
//!
//! One sum type covers the five annotation kinds plus the two substitution
//! sub-parts, so tag and class coverage is checked at compile time instead
//! of going through string-keyed dispatch.

use std::fmt::Write;

use redline_core::AnnotationKind;

/// Structural wrapper emitted around annotation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrapper {
    /// The outer wrapper of any of the five kinds.
    Kind(AnnotationKind),
    /// Old text inside a substitution, styled like a deletion.
    ReplacementOld,
    /// New text inside a substitution, styled like an addition.
    ReplacementNew,
}

impl Wrapper {
    pub(crate) fn html_tag(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.html_tag(),
            Self::ReplacementOld => "del",
            Self::ReplacementNew => "ins",
        }
    }

    pub(crate) fn css_suffix(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.css_suffix(),
            Self::ReplacementOld => AnnotationKind::Deletion.css_suffix(),
            Self::ReplacementNew => AnnotationKind::Addition.css_suffix(),
        }
    }

    /// Write the opening tag, e.g. `<ins class="criticmarkup-addition">`.
    pub(crate) fn push_open(self, prefix: &str, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            r#"<{} class="{}-{}">"#,
            self.html_tag(),
            prefix,
            self.css_suffix()
        );
    }

    /// Write the matching closing tag.
    pub(crate) fn push_close(self, out: &mut String) {
        let _ = write!(out, "</{}>", self.html_tag());
    }
}
