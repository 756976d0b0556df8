//! The annotation pattern catalog.

/// Separator between old and new text inside a substitution:
/// `{~~old~>new~~}`.
pub const SUBSTITUTION_SEPARATOR: &str = "~>";

/// One of the five tracked-change annotation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnnotationKind {
    /// `{++inserted text++}`
    Addition,
    /// `{--removed text--}`
    Deletion,
    /// `{~~old~>new~~}`
    Substitution,
    /// `{>>reviewer comment<<}`
    Comment,
    /// `{==highlighted text==}`
    Highlight,
}

impl AnnotationKind {
    /// All kinds, in match priority order.
    pub const ALL: [Self; 5] = [
        Self::Addition,
        Self::Deletion,
        Self::Substitution,
        Self::Comment,
        Self::Highlight,
    ];

    /// Opening delimiter: `{` followed by the sigil character twice.
    #[must_use]
    pub const fn open_delim(self) -> &'static str {
        match self {
            Self::Addition => "{++",
            Self::Deletion => "{--",
            Self::Substitution => "{~~",
            Self::Comment => "{>>",
            Self::Highlight => "{==",
        }
    }

    /// Closing delimiter. Note the comment close reverses direction (`<<}`).
    #[must_use]
    pub const fn close_delim(self) -> &'static str {
        match self {
            Self::Addition => "++}",
            Self::Deletion => "--}",
            Self::Substitution => "~~}",
            Self::Comment => "<<}",
            Self::Highlight => "==}",
        }
    }

    /// HTML element the preview wraps this kind in.
    #[must_use]
    pub const fn html_tag(self) -> &'static str {
        match self {
            Self::Addition => "ins",
            Self::Deletion => "del",
            Self::Substitution | Self::Comment => "span",
            Self::Highlight => "mark",
        }
    }

    /// CSS class suffix, appended to the configured prefix
    /// (e.g. `criticmarkup-addition`).
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Deletion => "deletion",
            Self::Substitution => "substitution",
            Self::Comment => "comment",
            Self::Highlight => "highlight",
        }
    }

    /// Kind whose opening delimiter uses the given sigil byte.
    pub(crate) const fn from_sigil(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Addition),
            b'-' => Some(Self::Deletion),
            b'~' => Some(Self::Substitution),
            b'>' => Some(Self::Comment),
            b'=' => Some(Self::Highlight),
            _ => None,
        }
    }
}
