//! CriticMarkup annotation scanning and navigation primitives.
//!
//! Recognizes the five tracked-change annotation patterns inside Markdown
//! text:
//!
//! | Kind | Open | Close |
//! |---|---|---|
//! | Addition | `{++` | `++}` |
//! | Deletion | `{--` | `--}` |
//! | Substitution | `{~~` | `~~}` (with `~>` between old and new text) |
//! | Comment | `{>>` | `<<}` |
//! | Highlight | `{==` | `==}` |
//!
//! Matching is literal substring search, not balancing: the first close
//! delimiter after the opener wins, and an unterminated pattern is simply
//! not a match. [`scanner::match_at`] is the single canonical primitive;
//! both the preview renderer (`redline-renderer`) and the navigation index
//! ([`navigate`]) are built on it so the two can never disagree about what
//! counts as an annotation.

mod kind;
mod navigate;
mod position;
mod scanner;

pub use kind::{AnnotationKind, SUBSTITUTION_SEPARATOR};
pub use navigate::{AnnotationRange, annotations, next_annotation, prev_annotation};
pub use position::{Position, position_at};
pub use scanner::{AnnotationMatch, MatchContent, find_from, match_at};
