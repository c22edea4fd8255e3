/// What kind of construct the scanner is inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Running prose. Always at the bottom of the stack.
    #[default]
    ParagraphText,
    /// Prose nested in math, e.g. `\text{...}`.
    InlineText,
    /// The title argument of a sectioning command.
    Heading,
    /// `$...$`, `\(...\)` and the `math` environment.
    InlineMath,
    /// `$$...$$`, `\[...\]` and display environments such as `equation`.
    DisplayMath,
    /// The body of an environment hidden from the checker.
    IgnoredEnvironment,
    /// An embedded code chunk.
    EmbeddedCodeChunk,
}

impl Mode {
    /// Inline or display math.
    #[must_use]
    pub fn is_math(self) -> bool {
        matches!(self, Mode::InlineMath | Mode::DisplayMath)
    }

    /// Anything but math and ignored environments.
    #[must_use]
    pub fn is_text(self) -> bool {
        !self.is_math() && self != Mode::IgnoredEnvironment
    }
}

/// A stack of modes that is never empty.
///
/// `push` and `pop` are the only mutations and both are total: popping the
/// last entry puts [`Mode::ParagraphText`] back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack {
    modes: Vec<Mode>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self {
            modes: vec![Mode::ParagraphText],
        }
    }
}

impl ModeStack {
    /// The innermost mode.
    #[must_use]
    pub fn top(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::ParagraphText)
    }

    /// Enters `mode`.
    pub fn push(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    /// Leaves the innermost mode and returns it.
    pub fn pop(&mut self) -> Mode {
        let mode = self.modes.pop().unwrap_or(Mode::ParagraphText);
        if self.modes.is_empty() {
            self.modes.push(Mode::ParagraphText);
        }
        mode
    }

    /// Number of entries, at least one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// The entries, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[Mode] {
        &self.modes
    }
}
