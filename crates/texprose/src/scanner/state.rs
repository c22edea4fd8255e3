use super::mode::{Mode, ModeStack};

/// Whether the first significant token of the current math span reads as
/// starting with a vowel ("an alpha", "an x", "a y").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MathVowel {
    /// Nothing significant seen yet.
    #[default]
    Undecided,
    /// Leads with a vowel sound.
    Vowel,
    /// Leads with a consonant sound.
    Consonant,
}

/// How an ignored environment ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IgnoredEnd {
    /// `\end{name}`
    End(String),
    /// ConTeXt `\stopname`, not followed by a letter.
    Stop(String),
}

impl IgnoredEnd {
    /// Length of the terminator at `at`, if it is there.
    pub(crate) fn matches(&self, source: &str, at: usize) -> Option<usize> {
        let rest = source.get(at..)?;
        match self {
            IgnoredEnd::End(name) => {
                let len = "\\end{".len() + name.len() + 1;
                let ok = rest.strip_prefix("\\end{")?.strip_prefix(name.as_str())?.starts_with('}');
                ok.then_some(len)
            }
            IgnoredEnd::Stop(name) => {
                let after = rest.strip_prefix("\\stop")?.strip_prefix(name.as_str())?;
                let boundary = !after.starts_with(|c: char| c.is_ascii_alphabetic());
                boundary.then_some("\\stop".len() + name.len())
            }
        }
    }
}

/// Everything one scan carries between characters.
///
/// The flags track what the plain text ended with and what a pending
/// placeholder should absorb, so that suppressed constructs leave behind
/// well-spaced, well-punctuated sentences.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScanState {
    /// Byte offset of the next unread char.
    pub pos: usize,
    pub modes: ModeStack,
    /// Top of `modes` when the current char was dispatched.
    pub mode: Mode,
    /// The plain text ends in whitespace.
    pub last_space: bool,
    /// The plain text ends in punctuation.
    pub last_punctuation: bool,
    /// A `~` or `&` inside math asks the next placeholder for a trailing space.
    pub pending_space: bool,
    /// Punctuation inside math, appended to the next placeholder.
    pub pending_punctuation: Option<char>,
    /// Keep the pending space and punctuation across the next markup.
    pub preserve_pending: bool,
    /// The enclosing math span has produced nothing yet.
    pub math_empty: bool,
    pub math_vowel: MathVowel,
    /// A spacing command may still become a space before the placeholder.
    pub space_before_placeholder: bool,
    /// The current char leaves `math_empty` and
    /// `space_before_placeholder` alone.
    pub trivial_math_char: bool,
    pub ignored_end: Option<IgnoredEnd>,
    /// Placeholders generated so far; the next one gets this number.
    pub placeholders: usize,
}

impl ScanState {
    /// Updates the trailing-space and trailing-punctuation flags after
    /// `plain` was appended to the plain text.
    pub fn text_added(&mut self, plain: &str) {
        let Some(last) = plain.chars().next_back() else {
            return;
        };
        self.last_space = matches!(last, ' ' | '\n' | '\r');
        self.last_punctuation = is_punctuation(last);
    }

    pub fn snapshot(&self, source: &str) -> crate::StallSnapshot {
        crate::StallSnapshot {
            position: self.pos,
            modes: self.modes.as_slice().to_vec(),
            last_space: self.last_space,
            last_punctuation: self.last_punctuation,
            math_empty: self.math_empty,
            space_before_placeholder: self.space_before_placeholder,
            math_vowel: self.math_vowel,
            placeholders: self.placeholders,
            context: crate::StallSnapshot::context_around(source, self.pos),
        }
    }
}

pub(crate) fn is_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | ':' | ';' | '\u{2026}')
}

/// Letters whose English name starts with a vowel sound.
pub(crate) fn is_vowel(ch: char) -> bool {
    matches!(
        ch.to_ascii_lowercase(),
        'a' | 'e' | 'f' | 'h' | 'i' | 'l' | 'm' | 'n' | 'o' | 'r' | 's' | 'x'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_environment_terminators() {
        let end = IgnoredEnd::End("verbatim".into());
        assert_eq!(end.matches("\\end{verbatim} x", 0), Some(14));
        assert_eq!(end.matches("\\end{verbatim*}", 0), None);

        let stop = IgnoredEnd::Stop("typing".into());
        assert_eq!(stop.matches("\\stoptyping\n", 0), Some(11));
        assert_eq!(stop.matches("\\stoptypingx", 0), None);
    }

    #[test]
    fn trailing_flags() {
        let mut state = ScanState::default();
        state.text_added("word.");
        assert!(state.last_punctuation && !state.last_space);
        state.text_added(" ");
        assert!(state.last_space && !state.last_punctuation);
        state.text_added("");
        assert!(state.last_space);
    }
}
