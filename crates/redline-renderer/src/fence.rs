//! Fenced code block tracking.
//!
//! Annotation delimiters inside fenced code must stay literal, so the
//! preprocessor feeds every line through this tracker and skips scanning
//! while a fence is open.

/// Line-by-line fence state.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: u8,
    len: usize,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the current line is inside an open fence.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one source line. Returns `true` when the line itself is a
    /// fence delimiter (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        if indent > 3 {
            // Indented that deep it is code content, never a fence.
            return false;
        }
        let marker_line = &line[indent..];
        match self.open {
            Some(fence) if closes(marker_line, fence) => {
                self.open = None;
                true
            }
            Some(_) => false,
            None => match opens(marker_line) {
                Some(fence) => {
                    self.open = Some(fence);
                    true
                }
                None => false,
            },
        }
    }
}

fn opens(line: &str) -> Option<Fence> {
    let marker = *line.as_bytes().first()?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let len = line.bytes().take_while(|&b| b == marker).count();
    if len < 3 {
        return None;
    }
    // An info string on a backtick fence cannot contain backticks.
    if marker == b'`' && line[len..].contains('`') {
        return None;
    }
    Some(Fence { marker, len })
}

fn closes(line: &str, fence: Fence) -> bool {
    let len = line.bytes().take_while(|&b| b == fence.marker).count();
    len >= fence.len && line[len..].bytes().all(|b| b.is_ascii_whitespace())
}
