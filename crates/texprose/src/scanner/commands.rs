//! Everything that starts with a backslash.

use unicode_normalization::UnicodeNormalization;

use super::{IgnoredEnd, MathVowel, Mode, Pass};
use crate::{
    lexeme,
    placeholder::PlaceholderGenerator,
    signature::{Action, ArgumentKind, matcher},
};

/// Environments whose body is a formula. `math` is inline, the rest display.
const MATH_ENVIRONMENTS: [&str; 17] = [
    "align",
    "align*",
    "alignat",
    "alignat*",
    "displaymath",
    "eqnarray",
    "eqnarray*",
    "equation",
    "equation*",
    "flalign",
    "flalign*",
    "formula",
    "gather",
    "gather*",
    "math",
    "multline",
    "multline*",
];

/// Font and decoration commands; the token they wrap decides the article.
const TRANSPARENT_IN_MATH: [&str; 24] = [
    "\\bm",
    "\\boldsymbol",
    "\\hat",
    "\\mathbb",
    "\\mathbf",
    "\\mathcal",
    "\\mathfrak",
    "\\mathit",
    "\\mathnormal",
    "\\mathsf",
    "\\mathtt",
    "\\mathop",
    "\\operatorname",
    "\\overbrace",
    "\\overleftarrow",
    "\\overleftrightarrow",
    "\\overline",
    "\\overrightarrow",
    "\\tilde",
    "\\underbrace",
    "\\underline",
    "\\vec",
    "\\widetilde",
    "\\widehat",
];

const VOWEL_IN_MATH: [&str; 8] = [
    "\\alpha",
    "\\ell",
    "\\epsilon",
    "\\eta",
    "\\iota",
    "\\Omega",
    "\\omega",
    "\\varepsilon",
];

const SECTIONING: [&str; 7] = [
    "\\part",
    "\\chapter",
    "\\section",
    "\\subsection",
    "\\subsubsection",
    "\\paragraph",
    "\\subparagraph",
];

fn special_letter(command: &str) -> Option<&'static str> {
    Some(match command {
        "\\AA" => "\u{00C5}",
        "\\L" => "\u{0141}",
        "\\O" => "\u{00D8}",
        "\\SS" => "\u{1E9E}",
        "\\aa" => "\u{00E5}",
        "\\i" => "\u{0131}",
        "\\j" => "\u{0237}",
        "\\l" => "\u{0142}",
        "\\o" => "\u{00F8}",
        "\\ss" => "\u{00DF}",
        _ => return None,
    })
}

fn shorthand(command: &str) -> Option<&'static str> {
    Some(match command {
        "\\dots" => "\u{2026}",
        "\\eg" => "e.g.",
        "\\egc" => "e.g.,",
        "\\euro" => "\u{20AC}",
        "\\ie" => "i.e.",
        "\\iec" => "i.e.,",
        _ => return None,
    })
}

fn is_spacing(command: &str) -> bool {
    matches!(
        command,
        "\\ " | "\\," | "\\;" | "\\\\" | "\\hfill" | "\\hspace" | "\\hspace*" | "\\quad" | "\\qquad" | "\\newline"
    )
}

fn is_accent(command: &str) -> bool {
    matches!(
        command.as_bytes(),
        [b'\\', b'`' | b'\'' | b'^' | b'~' | b'"' | b'=' | b'.' | b'H' | b'b' | b'c' | b'd' | b'k' | b'r' | b'u' | b'v']
    )
}

fn is_heading(command: &str) -> bool {
    SECTIONING.contains(&command.strip_suffix('*').unwrap_or(command))
}

/// `base` with the accent of `command` applied, NFC-composed where Unicode
/// has a precomposed form.
pub(super) fn compose_accent(command: u8, base: char) -> String {
    let mark = match command {
        b'`' => '\u{0300}',
        b'\'' => '\u{0301}',
        b'^' => '\u{0302}',
        b'~' => '\u{0303}',
        b'"' => '\u{0308}',
        b'=' => '\u{0304}',
        b'.' => '\u{0307}',
        b'H' => '\u{030B}',
        b'b' => '\u{0331}',
        b'c' => '\u{0327}',
        b'd' => '\u{0323}',
        b'k' => '\u{0328}',
        b'r' => '\u{030A}',
        b'u' => '\u{0306}',
        b'v' => '\u{030C}',
        _ => return base.to_string(),
    };
    [base, mark].into_iter().nfc().collect()
}

impl<'s> Pass<'s> {
    pub(super) fn backslash(&mut self) {
        let source = self.source;
        let pos = self.state.pos;
        // A lone trailing backslash names no command; the guard handles it.
        let Some(len) = lexeme::command(source, pos) else {
            return;
        };
        let command = &source[pos..pos + len];
        let math = self.state.mode.is_math();
        match command {
            "\\begin" | "\\end" => self.environment(command),
            _ if command.starts_with("\\start") || command.starts_with("\\stop") => {
                self.environment(command);
            }
            "\\$" | "\\%" | "\\&" => self.markup_as(len, &command[1..]),
            "\\[" => {
                self.enter_display_math();
                self.markup(len);
            }
            "\\(" => {
                self.enter_inline_math();
                self.markup(len);
            }
            "\\]" | "\\)" => {
                self.state.modes.pop();
                let placeholder = self.placeholder(PlaceholderGenerator::DEFAULT);
                self.markup_as(len, &placeholder);
            }
            "\\-" => self.markup(len),
            "\\notag" | "\\qed" => {
                self.state.preserve_pending = true;
                self.markup(len);
            }
            "\\text" | "\\intertext" => self.inline_text(len),
            "\\verb" | "\\verb*" => match lexeme::verb(source, pos) {
                Some(verb) => {
                    let placeholder = self.placeholder(PlaceholderGenerator::DEFAULT);
                    self.markup_as(verb, &placeholder);
                }
                None => self.markup(len),
            },
            _ if is_accent(command) => match lexeme::accent(source, pos).filter(|_| !math) {
                Some(accent) => self.markup_as(accent.len, &compose_accent(accent.command, accent.base)),
                None => self.markup(len),
            },
            _ if is_spacing(command) => self.spacing(command),
            _ if is_heading(command) => self.heading(len),
            _ => {
                if let Some(letter) = special_letter(command) {
                    self.markup_as(len, if math { "" } else { letter });
                } else if let Some(text) = shorthand(command) {
                    self.markup_as(len, if math { "" } else { text });
                } else {
                    self.generic_command(command);
                }
            }
        }
    }

    // ───────────────────────────── environments ─────────────────────────────

    /// `\begin{name}`, `\end{name}`, `\startname` and `\stopname`.
    fn environment(&mut self, command: &'s str) {
        let source = self.source;
        let registry = self.registry;
        let pos = self.state.pos;
        self.state.preserve_pending = true;

        let begins = command == "\\begin" || command.starts_with("\\start");
        let braced = command == "\\begin" || command == "\\end";
        let (argument_len, name) = if braced {
            let at = pos + command.len();
            match lexeme::braced_group(source, at) {
                Some(n) => (n, &source[at + 1..at + n - 1]),
                None => (0, ""),
            }
        } else if begins {
            (0, &command["\\start".len()..])
        } else {
            (0, &command["\\stop".len()..])
        };

        let mut arguments_done = false;
        if MATH_ENVIRONMENTS.contains(&name) {
            if begins {
                self.markup(command.len());
                if name == "math" {
                    self.enter_inline_math();
                } else {
                    self.enter_display_math();
                }
            } else {
                self.state.modes.pop();
                let placeholder = self.placeholder(PlaceholderGenerator::DEFAULT);
                self.state.trivial_math_char = true;
                self.markup_as(command.len() + argument_len, &placeholder);
                return;
            }
        } else if begins {
            let opening = if braced {
                &source[pos..pos + command.len() + argument_len]
            } else {
                command
            };
            let matched = registry.match_environment(opening, source, pos).map(|m| {
                (m.signature.action(), m.signature.ignores_all_arguments(), m.len())
            });
            match matched {
                Some((action, ignore_all, len)) => {
                    if action == Action::Ignore {
                        self.state.modes.push(Mode::IgnoredEnvironment);
                        self.state.ignored_end = Some(if braced {
                            IgnoredEnd::End(name.to_owned())
                        } else {
                            IgnoredEnd::Stop(name.to_owned())
                        });
                    } else {
                        self.state.modes.push(self.state.mode);
                    }
                    if ignore_all {
                        self.markup(command.len());
                    } else {
                        self.markup(len);
                        arguments_done = true;
                    }
                }
                None => {
                    self.markup(command.len());
                    self.state.modes.push(self.state.mode);
                }
            }
        } else {
            self.markup(command.len());
            self.state.modes.pop();
        }

        if self.state.modes.top() == Mode::IgnoredEnvironment {
            return;
        }
        self.state.trivial_math_char = true;
        self.state.preserve_pending = true;
        if !arguments_done {
            self.markup(argument_len);
            if begins {
                self.environment_arguments();
            }
        }
    }

    /// Swallows any run of arguments directly after an environment opening.
    fn environment_arguments(&mut self) {
        const KINDS: [ArgumentKind; 3] = [ArgumentKind::Brace, ArgumentKind::Bracket, ArgumentKind::Parenthesis];
        while let Some(end) = KINDS
            .into_iter()
            .find_map(|kind| matcher::match_argument(self.source, self.state.pos, kind))
        {
            self.markup(end - self.state.pos);
        }
    }

    // ────────────────────────────── commands ──────────────────────────────

    fn spacing(&mut self, command: &str) {
        let mut len = command.len();
        if command.starts_with("\\hspace") {
            len += lexeme::braced_group(self.source, self.state.pos + len).unwrap_or(0);
        }
        let math = self.state.mode.is_math();
        if math && !self.state.last_space && self.state.space_before_placeholder {
            self.markup_as(len, " ");
            return;
        }
        self.state.preserve_pending = true;
        if math {
            self.markup(len);
            self.state.pending_space = true;
        } else {
            let space = if self.state.last_space {
                ""
            } else if command == "\\," {
                "\u{202F}"
            } else {
                " "
            };
            self.markup_as(len, space);
        }
    }

    /// Sectioning commands: the optional short title is markup, the title
    /// itself is scanned as a heading that ends in a period.
    fn heading(&mut self, len: usize) {
        self.markup(len);
        if let Some(end) = matcher::match_argument(self.source, self.state.pos, ArgumentKind::Bracket) {
            self.markup(end - self.state.pos);
        }
        if self.next_char(0) == Some('{') {
            self.state.modes.push(Mode::Heading);
            self.markup(1);
        }
    }

    /// `\text{` and `\intertext{`: prose nested in math.
    fn inline_text(&mut self, len: usize) {
        if self.next_char(len) != Some('{') {
            self.markup(len);
            return;
        }
        self.state.modes.push(Mode::InlineText);
        let placeholder = if self.state.mode.is_math() {
            self.placeholder(PlaceholderGenerator::DEFAULT)
        } else {
            String::new()
        };
        self.markup_as(len + 1, &placeholder);
    }

    fn generic_command(&mut self, command: &str) {
        let registry = self.registry;
        let matched = registry
            .match_command(command, self.source, self.state.pos)
            .map(|m| (m.signature.action(), m.len()));
        match matched {
            Some((Action::Ignore, len)) => self.markup(len),
            Some((Action::Placeholder(generator), len)) => {
                let placeholder = self.placeholder(generator);
                self.markup_as(len, &placeholder);
            }
            Some((Action::Default, _)) | None => {
                if self.state.mode.is_math() && self.state.math_vowel == MathVowel::Undecided {
                    if VOWEL_IN_MATH.contains(&command) {
                        self.state.math_vowel = MathVowel::Vowel;
                    } else if !TRANSPARENT_IN_MATH.contains(&command) {
                        self.state.math_vowel = MathVowel::Consonant;
                    }
                }
                self.markup(command.len());
            }
        }
    }
}
