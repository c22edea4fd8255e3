//! Scanner: one left-to-right pass turning a LaTeX fragment into
//! [`AnnotatedText`].
//!
//! What it does
//! - Decides one construct per iteration from the current [`Mode`] and the
//!   char at the read position, and emits it as text or markup.
//! - Tracks nested constructs on a [`ModeStack`]: braces re-push the current
//!   mode, math delimiters and environments push their own.
//! - Replaces suppressed constructs (citations, formulas, `\verb`) with
//!   placeholder words, absorbing punctuation and spacing seen inside math so
//!   the sentence around them still reads naturally.
//!
//! Invariants
//! - Every iteration either consumes at least one char or trips the
//!   liveness guard. In strict mode the guard returns
//!   [`ScanError::Stalled`]; otherwise it logs, emits one char as markup and
//!   continues. A scan therefore runs in time linear in the fragment length.
//! - All emitted raw slices are taken from the source at the read position,
//!   so spans always tile the fragment.
//! - [`ScanState`] lives for exactly one [`Scanner::scan`] call.

mod commands;
mod mode;
mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use mode::{Mode, ModeStack};
pub use state::MathVowel;
use state::{IgnoredEnd, ScanState, is_punctuation, is_vowel};

use crate::{
    AnnotatedText, AnnotatedTextBuilder, ScanError, lexeme,
    options::{Dialect, ScanConfig, ScanOptions},
    placeholder::PlaceholderGenerator,
    signature::SignatureRegistry,
};

/// A piece of a document to scan, with its byte offset in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFragment<'a> {
    /// The fragment text.
    pub text: &'a str,
    /// Byte offset of `text` within its document.
    pub offset: usize,
}

impl<'a> SourceFragment<'a> {
    /// A fragment of `text` starting at byte `offset` of its document.
    #[must_use]
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }
}

impl<'a> From<&'a str> for SourceFragment<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text, 0)
    }
}

/// Extracts checkable prose from LaTeX.
///
/// Construct once per configuration. Scanning takes `&self`, so one scanner
/// may serve any number of fragments, in sequence or from several threads.
///
/// ```
/// use texprose::{ScanConfig, Scanner};
///
/// let scanner = Scanner::new(&ScanConfig::default());
/// let text = scanner.scan("As shown in \\cite{knuth}, it works.\n").unwrap();
/// assert_eq!(text.plain_text(), "As shown in Dummy0, it works. ");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    registry: Arc<SignatureRegistry>,
    options: ScanOptions,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_registry(Arc::new(SignatureRegistry::with_defaults()), ScanOptions::default())
    }
}

impl Scanner {
    /// A scanner for the given effective configuration.
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        Self::with_registry(Arc::new(config.registry()), config.options())
    }

    /// A scanner sharing an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<SignatureRegistry>, options: ScanOptions) -> Self {
        Self { registry, options }
    }

    /// The signatures this scanner consults.
    #[must_use]
    pub fn registry(&self) -> &Arc<SignatureRegistry> {
        &self.registry
    }

    /// The per-scan options.
    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans one fragment.
    ///
    /// # Errors
    ///
    /// Only in strict mode: [`ScanError::Stalled`] if an iteration made no
    /// progress.
    pub fn scan<'a>(&self, fragment: impl Into<SourceFragment<'a>>) -> Result<AnnotatedText, ScanError> {
        self.run(fragment.into()).map(|(text, _)| text)
    }

    pub(crate) fn run(&self, fragment: SourceFragment<'_>) -> Result<(AnnotatedText, ModeStack), ScanError> {
        Pass::new(fragment, &self.registry, &self.options).run()
    }
}

/// One scan in progress.
pub(crate) struct Pass<'s> {
    source: &'s str,
    registry: &'s SignatureRegistry,
    options: &'s ScanOptions,
    pub(crate) state: ScanState,
    builder: AnnotatedTextBuilder,
}

impl<'s> Pass<'s> {
    pub(crate) fn new(
        fragment: SourceFragment<'s>,
        registry: &'s SignatureRegistry,
        options: &'s ScanOptions,
    ) -> Self {
        Self {
            source: fragment.text,
            registry,
            options,
            state: ScanState::default(),
            builder: AnnotatedTextBuilder::with_origin(fragment.offset),
        }
    }

    pub(crate) fn run(mut self) -> Result<(AnnotatedText, ModeStack), ScanError> {
        while self.state.pos < self.source.len() {
            let before = self.state.pos;
            self.step();
            if self.state.pos <= before {
                self.stalled()?;
            }
        }
        let text = self.builder.build();
        tracing::trace!(
            source_len = self.source.len(),
            spans = text.spans().len(),
            placeholders = self.state.placeholders,
            "scanned fragment"
        );
        Ok((text, self.state.modes))
    }

    fn stalled(&mut self) -> Result<(), ScanError> {
        let snapshot = self.state.snapshot(self.source);
        if self.options.strict {
            return Err(ScanError::Stalled(Box::new(snapshot)));
        }
        tracing::warn!(
            position = self.state.pos,
            mode = ?self.state.mode,
            %snapshot,
            "scanner made no progress, skipping one character"
        );
        let len = lexeme::decode(self.source, self.state.pos).map_or(1, |(_, len)| len);
        self.markup(len);
        Ok(())
    }

    /// Processes the construct at the read position.
    pub(crate) fn step(&mut self) {
        self.state.mode = self.state.modes.top();
        self.state.trivial_math_char = false;
        let Some((ch, len)) = lexeme::decode(self.source, self.state.pos) else {
            return;
        };
        match self.state.mode {
            Mode::IgnoredEnvironment => self.ignored_environment(len),
            Mode::EmbeddedCodeChunk => self.code_chunk(ch, len),
            _ => match ch {
                '\\' => self.backslash(),
                '{' => self.open_brace(),
                '}' => self.close_brace(),
                '$' => self.dollar(),
                '%' => self.percent(),
                ' ' | '&' | '~' | '\n' | '\r' | '\t' => self.whitespace(ch),
                '`' | '\'' | '"' => self.quotation_mark(ch),
                _ => self.default_char(ch, len),
            },
        }
        if !self.state.trivial_math_char {
            self.state.space_before_placeholder = false;
            self.state.math_empty = false;
        }
    }

    // ───────────────────────────── emitting ─────────────────────────────

    fn rest(&self) -> &'s str {
        &self.source[self.state.pos..]
    }

    fn next_char(&self, offset: usize) -> Option<char> {
        lexeme::decode(self.source, self.state.pos + offset).map(|(ch, _)| ch)
    }

    fn raw(&self, len: usize) -> &'s str {
        let end = (self.state.pos + len).min(self.source.len());
        &self.source[self.state.pos..end]
    }

    /// Emits the next `len` bytes as checkable text.
    fn text(&mut self, len: usize) {
        let raw = self.raw(len);
        if raw.is_empty() {
            return;
        }
        self.builder.append_text(raw);
        self.state.pos += raw.len();
        self.state.text_added(raw);
    }

    /// Emits the next `len` bytes as markup without interpretation.
    fn markup(&mut self, len: usize) {
        let raw = self.raw(len);
        if raw.is_empty() {
            return;
        }
        self.builder.append_markup(raw, "");
        self.state.pos += raw.len();
        if self.state.preserve_pending {
            self.state.preserve_pending = false;
        } else {
            self.state.pending_space = false;
            self.state.pending_punctuation = None;
        }
    }

    /// Emits the next `len` bytes as markup read as `interpreted`.
    fn markup_as(&mut self, len: usize, interpreted: &str) {
        if interpreted.is_empty() {
            self.markup(len);
            return;
        }
        let raw = self.raw(len);
        if raw.is_empty() {
            return;
        }
        self.builder.append_markup(raw, interpreted);
        self.state.pos += raw.len();
        self.state.preserve_pending = false;
        self.state.text_added(interpreted);
    }

    // ──────────────────────────── placeholders ────────────────────────────

    /// Text standing in for the construct that just ended, shaped by the
    /// mode it ended in.
    fn placeholder(&mut self, generator: PlaceholderGenerator) -> String {
        let leads_with_vowel = self.state.math_vowel == MathVowel::Vowel;
        let mode = self.state.mode;
        let out = if mode.is_text() {
            self.numbered(generator, leads_with_vowel)
        } else if self.state.math_empty {
            if mode == Mode::DisplayMath && !self.state.last_space {
                " ".to_owned()
            } else {
                String::new()
            }
        } else if mode == Mode::DisplayMath {
            let mut out = String::new();
            if !self.state.last_space {
                out.push(' ');
            }
            out.push_str(&self.numbered(generator, false));
            out.extend(self.state.pending_punctuation);
            if self.state.modes.top() != Mode::InlineText || self.state.pending_space {
                out.push(' ');
            }
            out
        } else {
            let mut out = self.numbered(generator, leads_with_vowel);
            out.extend(self.state.pending_punctuation);
            if self.state.pending_space {
                out.push(' ');
            }
            out
        };
        self.state.pending_space = false;
        self.state.pending_punctuation = None;
        self.state.math_vowel = MathVowel::Undecided;
        out
    }

    fn numbered(&mut self, generator: PlaceholderGenerator, leads_with_vowel: bool) -> String {
        let number = self.state.placeholders;
        self.state.placeholders += 1;
        generator.generate(&self.options.language, number, leads_with_vowel)
    }

    // ─────────────────────────────── modes ───────────────────────────────

    fn enter_display_math(&mut self) {
        self.state.modes.push(Mode::DisplayMath);
        self.state.math_empty = true;
        self.state.math_vowel = MathVowel::Undecided;
        self.state.space_before_placeholder = true;
    }

    fn enter_inline_math(&mut self) {
        self.state.modes.push(Mode::InlineMath);
        self.state.math_empty = true;
        self.state.math_vowel = MathVowel::Undecided;
        self.state.space_before_placeholder = true;
        self.state.trivial_math_char = true;
    }

    fn ignored_environment(&mut self, len: usize) {
        let Some(end) = &self.state.ignored_end else {
            tracing::warn!(position = self.state.pos, "ignored environment without terminator");
            self.state.modes.pop();
            self.markup(len);
            return;
        };
        if let Some(end_len) = end.matches(self.source, self.state.pos) {
            self.state.modes.pop();
            self.state.ignored_end = None;
            self.markup(end_len);
        } else {
            self.markup(len);
        }
    }

    fn code_chunk(&mut self, ch: char, len: usize) {
        if ch == '@' {
            self.state.modes.pop();
        }
        self.markup(len);
    }

    // ───────────────────────────── characters ─────────────────────────────

    fn open_brace(&mut self) {
        let pos = self.state.pos;
        if let Some(len) = lexeme::length(self.source, pos, b'{', b'}') {
            self.markup(len);
        } else if let Some(accent) = lexeme::accent_in_braces(self.source, pos) {
            let composed = commands::compose_accent(accent.command, accent.base);
            self.markup_as(accent.len, &composed);
        } else {
            self.state.modes.push(self.state.mode);
            self.markup(1);
        }
    }

    fn close_brace(&mut self) {
        let mode = self.state.mode;
        let interpreted = if mode == Mode::Heading && !self.state.last_punctuation {
            "."
        } else if mode.is_text() && self.next_char(1) == Some('{') {
            " "
        } else {
            ""
        };
        self.state.modes.pop();
        self.markup_as(1, interpreted);
        self.state.space_before_placeholder = true;
        if mode.is_text() && self.state.modes.top().is_math() {
            self.state.math_empty = true;
        }
        self.state.trivial_math_char = true;
    }

    fn dollar(&mut self) {
        if self.rest().starts_with("$$") {
            if self.state.mode == Mode::DisplayMath {
                self.state.modes.pop();
                let placeholder = self.placeholder(PlaceholderGenerator::DEFAULT);
                self.markup_as(2, &placeholder);
            } else {
                self.enter_display_math();
                self.markup(2);
            }
        } else if self.state.mode == Mode::InlineMath {
            self.state.modes.pop();
            let placeholder = self.placeholder(PlaceholderGenerator::DEFAULT);
            self.markup_as(1, &placeholder);
        } else {
            self.enter_inline_math();
            self.markup(1);
        }
    }

    fn percent(&mut self) {
        let len = lexeme::comment(self.source, self.state.pos).unwrap_or(1);
        self.state.preserve_pending = true;
        self.state.trivial_math_char = true;
        let interpreted = if lexeme::has_blank_line(self.raw(len)) { "\n\n" } else { "" };
        self.markup_as(len, interpreted);
    }

    fn whitespace(&mut self, ch: char) {
        let len = if matches!(ch, '~' | '&') {
            1
        } else {
            lexeme::whitespace(self.source, self.state.pos).unwrap_or(1)
        };
        self.state.preserve_pending = true;
        self.state.trivial_math_char = true;
        if self.state.mode.is_text() {
            let interpreted = if lexeme::has_blank_line(self.raw(len)) {
                "\n\n"
            } else if self.state.last_space {
                ""
            } else if ch == '~' {
                "\u{00A0}"
            } else {
                " "
            };
            self.markup_as(len, interpreted);
        } else {
            self.markup(len);
        }
        if matches!(ch, '~' | '&') {
            self.state.pending_space = true;
        }
    }

    fn quotation_mark(&mut self, ch: char) {
        if !self.state.mode.is_text() {
            self.markup(1);
            return;
        }
        let rest = self.rest();
        let digraph = [
            ("``", "\u{201C}"),
            ("\"'", "\u{201C}"),
            ("''", "\u{201D}"),
            ("\"`", "\u{201E}"),
            ("\"-", ""),
            ("\"\"", ""),
            ("\"|", ""),
            ("\"=", "-"),
            ("\"~", "-"),
        ]
        .into_iter()
        .find(|(pair, _)| rest.starts_with(pair));
        match digraph {
            Some((pair, interpreted)) => self.markup_as(pair.len(), interpreted),
            None => self.plain_char(ch, 1),
        }
    }

    fn default_char(&mut self, ch: char, len: usize) {
        let pos = self.state.pos;
        if ch == '-' && self.state.mode.is_text() {
            if self.rest().starts_with("---") {
                self.markup_as(3, "\u{2014}");
                return;
            }
            if self.rest().starts_with("--") {
                self.markup_as(2, "\u{2013}");
                return;
            }
        } else if ch == '[' {
            if let Some(length) = lexeme::length(self.source, pos, b'[', b']') {
                self.state.trivial_math_char = true;
                self.state.preserve_pending = true;
                self.markup(length);
                return;
            }
        } else if ch == '<' && self.options.dialect == Dialect::Rsweave {
            if let Some(chunk) = lexeme::chunk_begin(self.source, pos) {
                self.state.modes.push(Mode::EmbeddedCodeChunk);
                self.markup(chunk);
                return;
            }
        }
        self.plain_char(ch, len);
    }

    /// A char with no special meaning: prose in text modes, an opaque token
    /// elsewhere.
    fn plain_char(&mut self, ch: char, len: usize) {
        if self.state.mode.is_text() {
            self.text(len);
            if is_punctuation(ch) {
                self.state.last_punctuation = true;
            }
            return;
        }
        self.markup(len);
        if is_punctuation(ch) {
            self.state.pending_punctuation = Some(ch);
        }
        if self.state.math_vowel == MathVowel::Undecided {
            self.state.math_vowel = if is_vowel(ch) {
                MathVowel::Vowel
            } else {
                MathVowel::Consonant
            };
        }
    }
}
