//! Annotation preprocessing.
//!
//! Rewrites annotation spans into inline HTML wrapper tags before the host
//! markdown parser runs. Two recognition paths mirror the precedence the
//! syntax needs relative to the host's own rules:
//!
//! - A block-level guard claims patterns whose opening delimiter starts a
//!   line and whose close lies on a later line. The whole span is emitted
//!   as one paragraph so a blank line inside it cannot fragment the
//!   pattern.
//! - Everything else is scanned inline within one text chunk (a run of
//!   lines unbroken by blank lines or code). The close-delimiter search is
//!   bounded by the chunk, so a pattern that starts mid-line and spans a
//!   paragraph break stays literal. That asymmetry against the block guard
//!   is a documented limitation of the block detection strategy, and
//!   navigation intentionally still sees such patterns.
//!
//! Code fences and inline code spans are skipped entirely, keeping
//! annotation syntax inside code literal.

use redline_core::{AnnotationKind, AnnotationMatch, MatchContent, match_at};

use crate::fence::FenceTracker;
use crate::wrapper::Wrapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Blank,
    Code,
    Text,
}

/// Text-to-text pass that replaces annotation syntax with HTML wrappers.
#[derive(Debug, Clone)]
pub struct AnnotationProcessor {
    prefix: String,
}

impl AnnotationProcessor {
    /// Create a processor emitting classes under the given prefix
    /// (e.g. `criticmarkup` or `mdmarkup`).
    #[must_use]
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self {
            prefix: class_prefix.into(),
        }
    }

    /// Rewrite all recognized annotations in `input`.
    ///
    /// Unrecognized or malformed patterns pass through untouched; the
    /// worst case for bad input is literal punctuation in the output.
    #[must_use]
    pub fn process(&self, input: &str) -> String {
        let lines: Vec<&str> = input.split('\n').collect();
        let classes = classify(&lines);
        let mut offsets = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            offsets.push(offset);
            offset += line.len() + 1;
        }

        let mut out = String::with_capacity(input.len() + 64);
        let mut first_emit = true;
        let mut after_block = false;
        let mut i = 0;
        while i < lines.len() {
            if classes[i] != LineClass::Text {
                if !first_emit {
                    out.push('\n');
                }
                first_emit = false;
                out.push_str(lines[i]);
                after_block = false;
                i += 1;
                continue;
            }

            if !first_emit {
                out.push('\n');
            }
            first_emit = false;
            if after_block {
                // Keep a consumed block and the following text in
                // separate paragraphs.
                out.push('\n');
            }

            if let Some((rendered, next_line)) = self.try_block(input, &lines, &offsets, i) {
                out.push_str(&rendered);
                after_block = true;
                i = next_line;
            } else {
                let mut chunk_end = i + 1;
                while chunk_end < lines.len() && classes[chunk_end] == LineClass::Text {
                    chunk_end += 1;
                }
                let chunk =
                    &input[offsets[i]..offsets[chunk_end - 1] + lines[chunk_end - 1].len()];
                out.push_str(&self.scan_inline(chunk));
                after_block = false;
                i = chunk_end;
            }
        }
        out
    }

    /// Block-level multi-line guard.
    ///
    /// Fires only when the first non-indentation characters of the chunk's
    /// first line are an opening delimiter and the closing delimiter sits
    /// on a later line (searched across the entire remaining buffer). The
    /// captured span is collapsed into a single paragraph; blank lines
    /// inside it are dropped rather than splitting the wrapper. Returns
    /// the rendered paragraph and the index of the first unconsumed line.
    fn try_block(
        &self,
        input: &str,
        lines: &[&str],
        offsets: &[usize],
        start_line: usize,
    ) -> Option<(String, usize)> {
        let line = lines[start_line];
        let indent = line.len() - line.trim_start().len();
        let trimmed = &line[indent..];
        AnnotationKind::ALL
            .iter()
            .find(|kind| trimmed.starts_with(kind.open_delim()))?;

        let found = match_at(input, offsets[start_line] + indent)?;
        let span = &input[found.start..found.end];
        if !span.contains('\n') {
            // Single-line pattern, the inline path handles it.
            return None;
        }

        let mut end_line = start_line;
        while offsets[end_line] + lines[end_line].len() < found.end {
            end_line += 1;
        }
        tracing::debug!(
            kind = ?found.kind,
            lines = end_line - start_line + 1,
            "consumed multi-line annotation block"
        );

        let collapsed = collapse_blank_lines(span);
        let mut rendered = self.scan_inline(&collapsed);
        let tail = &input[found.end..offsets[end_line] + lines[end_line].len()];
        if !tail.is_empty() {
            rendered.push_str(&self.scan_inline(tail));
        }
        Some((rendered, end_line + 1))
    }

    /// Scan one text chunk, replacing annotations and copying everything
    /// else through. Inline code spans are copied verbatim.
    fn scan_inline(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let bytes = text.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            match bytes[pos] {
                b'`' => {
                    let end = code_span_end(text, pos);
                    out.push_str(&text[pos..end]);
                    pos = end;
                }
                b'{' => {
                    if let Some(found) = match_at(text, pos) {
                        self.emit(&found, &mut out);
                        pos = found.end;
                    } else {
                        out.push('{');
                        pos += 1;
                    }
                }
                _ => {
                    let stop = bytes[pos + 1..]
                        .iter()
                        .position(|&b| b == b'`' || b == b'{')
                        .map_or(text.len(), |rel| pos + 1 + rel);
                    out.push_str(&text[pos..stop]);
                    pos = stop;
                }
            }
        }
        out
    }

    /// Emit one matched annotation, re-entering the scanner on its inner
    /// text so nested annotations of other kinds still resolve. The inner
    /// text is strictly shorter than the match, so the recursion always
    /// terminates. Markdown syntax inside the span is left for the host
    /// parser.
    fn emit(&self, found: &AnnotationMatch<'_>, out: &mut String) {
        match found.content {
            MatchContent::Single(inner) => {
                let wrapper = Wrapper::Kind(found.kind);
                wrapper.push_open(&self.prefix, out);
                if !inner.is_empty() {
                    out.push_str(&self.scan_inline(inner));
                }
                wrapper.push_close(out);
            }
            MatchContent::Replacement { old, new } => {
                let outer = Wrapper::Kind(AnnotationKind::Substitution);
                outer.push_open(&self.prefix, out);
                for (wrapper, part) in [(Wrapper::ReplacementOld, old), (Wrapper::ReplacementNew, new)]
                {
                    wrapper.push_open(&self.prefix, out);
                    if !part.is_empty() {
                        out.push_str(&self.scan_inline(part));
                    }
                    wrapper.push_close(out);
                }
                outer.push_close(out);
            }
        }
    }
}

/// Classify each line as blank, code, or text.
///
/// Container (list/blockquote) context is not tracked: a 4-space-indented
/// line after a blank line is treated as indented code even when a
/// surrounding list item would make it a paragraph continuation, so
/// annotations inside such a continuation stay literal.
fn classify(lines: &[&str]) -> Vec<LineClass> {
    let mut fence = FenceTracker::new();
    let mut classes: Vec<LineClass> = Vec::with_capacity(lines.len());
    for line in lines {
        let class = if fence.update(line) || fence.in_fence() {
            LineClass::Code
        } else if line.trim().is_empty() {
            LineClass::Blank
        } else if is_indented_code(line, classes.last().copied()) {
            LineClass::Code
        } else {
            LineClass::Text
        };
        classes.push(class);
    }
    classes
}

/// Indented code, which cannot interrupt a paragraph.
fn is_indented_code(line: &str, prev: Option<LineClass>) -> bool {
    !matches!(prev, Some(LineClass::Text))
        && (line.starts_with("    ") || line.starts_with('\t'))
}

/// Drop blank lines from a multi-line span so the emitted wrapper stays
/// within one paragraph.
fn collapse_blank_lines(span: &str) -> String {
    let kept: Vec<&str> = span.lines().filter(|line| !line.trim().is_empty()).collect();
    kept.join("\n")
}

/// End of the inline code span opened by the backtick run at `pos`, or the
/// end of the run itself when no closing run of the same length exists.
fn code_span_end(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = pos;
    while i < bytes.len() && bytes[i] == b'`' {
        i += 1;
    }
    let run = i - pos;

    let mut j = i;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let start = j;
            while j < bytes.len() && bytes[j] == b'`' {
                j += 1;
            }
            if j - start == run {
                return j;
            }
        } else {
            j += 1;
        }
    }
    i
}
