use core::fmt;

use thiserror::Error;

use crate::scanner::{MathVowel, Mode};

/// Why a scan did not produce an [`AnnotatedText`](crate::AnnotatedText).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// An iteration consumed no input. Only raised in strict mode; lenient
    /// scans log the same snapshot and skip one character.
    #[error("scanner stalled {0}")]
    Stalled(Box<StallSnapshot>),
}

/// Scanner state at the moment it stopped making progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallSnapshot {
    /// Byte offset into the fragment.
    pub position: usize,
    /// The mode stack, bottom first.
    pub modes: Vec<Mode>,
    /// The last emitted plain text ended in whitespace.
    pub last_space: bool,
    /// The last emitted plain text ended in punctuation.
    pub last_punctuation: bool,
    /// The enclosing math has produced nothing yet.
    pub math_empty: bool,
    /// A spacing command may still emit a space before the next placeholder.
    pub space_before_placeholder: bool,
    /// What the enclosing math token starts with.
    pub math_vowel: MathVowel,
    /// Placeholders generated so far.
    pub placeholders: usize,
    /// Source around `position`, at most [`StallSnapshot::CONTEXT`] bytes on
    /// each side.
    pub context: String,
}

impl StallSnapshot {
    /// Bytes of context kept on each side of the stall position.
    pub const CONTEXT: usize = 32;

    pub(crate) fn context_around(source: &str, position: usize) -> String {
        let mut start = position.saturating_sub(Self::CONTEXT);
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (position + Self::CONTEXT).min(source.len());
        while !source.is_char_boundary(end) {
            end += 1;
        }
        source[start..end].to_owned()
    }
}

impl fmt::Display for StallSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at byte {} in {:?} (last_space={}, last_punctuation={}, math_empty={}, \
             space_before_placeholder={}, math_vowel={:?}, placeholders={}) near {:?}",
            self.position,
            self.modes,
            self.last_space,
            self.last_punctuation,
            self.math_empty,
            self.space_before_placeholder,
            self.math_vowel,
            self.placeholders,
            self.context,
        )
    }
}
