//! Recognizers for the small lexical shapes the scanner and the signature
//! matcher look for.
//!
//! Each recognizer takes the source and a byte offset and returns the byte
//! length of the match starting exactly there, or `None`. Matches are never
//! empty, and every returned length ends on a char boundary.

/// Decodes the char at `at`.
pub(crate) fn decode(source: &str, at: usize) -> Option<(char, usize)> {
    let bytes = source.as_bytes().get(at..)?;
    let (ch, len) = bstr::decode_utf8(bytes);
    if len == 0 {
        return None;
    }
    Some((ch.unwrap_or('\u{FFFD}'), len))
}

fn is_command_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'@'
}

/// `\name` with `name` a run of letters (and `@`), or `\` plus exactly one
/// other char. Either form takes an optional trailing `*`.
pub(crate) fn command(source: &str, at: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&b'\\') {
        return None;
    }
    let name = at + 1;
    let letters = bytes[name..].iter().take_while(|b| is_command_letter(**b)).count();
    let mut end = if letters > 0 {
        name + letters
    } else {
        name + decode(source, name)?.1
    };
    if bytes.get(end) == Some(&b'*') {
        end += 1;
    }
    Some(end - at)
}

/// Length of the line break at `at`: `\n`, `\r\n`, or a lone `\r`.
fn line_break(bytes: &[u8], at: usize) -> Option<usize> {
    match bytes.get(at)? {
        b'\n' => Some(1),
        b'\r' if bytes.get(at + 1) == Some(&b'\n') => Some(2),
        b'\r' => Some(1),
        _ => None,
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t')
}

/// `%` through the end of its line, plus the whitespace run after the line
/// break. A comment on the last line runs to the end of input.
pub(crate) fn comment(source: &str, at: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&b'%') {
        return None;
    }
    let mut i = at + 1;
    while i < bytes.len() {
        if let Some(br) = line_break(bytes, i) {
            i += br;
            i += bytes[i..].iter().take_while(|b| is_space(**b)).count();
            return Some(i - at);
        }
        i += 1;
    }
    Some(i - at)
}

/// A run of whitespace, swallowing a comment that directly follows it.
pub(crate) fn whitespace(source: &str, at: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let run = bytes.get(at..)?.iter().take_while(|b| is_space(**b)).count();
    if run == 0 {
        return None;
    }
    Some(run + comment(source, at + run).unwrap_or(0))
}

/// `{` up to the first `}`, without nesting.
pub(crate) fn braced_group(source: &str, at: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&b'{') {
        return None;
    }
    let close = bytes[at + 1..].iter().position(|b| *b == b'}')?;
    Some(close + 2)
}

const LENGTH_UNITS: [&[u8]; 9] = [b"pt", b"mm", b"cm", b"ex", b"em", b"bp", b"dd", b"pc", b"in"];

/// A TeX length such as `{12pt}`, `[-.5em]` or a bare unit like `{in}`,
/// delimited by `open`/`close`.
pub(crate) fn length(source: &str, at: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&open) {
        return None;
    }
    let mut i = at + 1;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    i += bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    if bytes.get(i) == Some(&b'.') {
        let frac_digits = bytes[i + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    let unit = LENGTH_UNITS.iter().find(|u| bytes[i..].starts_with(u))?;
    i += unit.len();
    (bytes.get(i) == Some(&close)).then_some(i + 1 - at)
}

/// An accent command applied to a base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Accent {
    pub len: usize,
    pub command: u8,
    pub base: char,
}

const ACCENT_COMMANDS: &[u8] = b"`'^~\"=.Hbcdkruv";

fn accent_base(bytes: &[u8], at: usize) -> Option<(char, usize)> {
    match *bytes.get(at)? {
        b if b.is_ascii_alphabetic() => Some((char::from(b), 1)),
        b'\\' => match bytes.get(at + 1)? {
            b'i' => Some(('\u{0131}', 2)),
            b'j' => Some(('\u{0237}', 2)),
            _ => None,
        },
        _ => None,
    }
}

/// `\"a`, `\" a`, `\"{a}`, `\v{S}`, `\'\i` and the like.
pub(crate) fn accent(source: &str, at: usize) -> Option<Accent> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&b'\\') {
        return None;
    }
    let command = *bytes.get(at + 1)?;
    if !ACCENT_COMMANDS.contains(&command) {
        return None;
    }
    let arg = at + 2;
    let spaces = bytes[arg..].iter().take_while(|b| **b == b' ').count();
    // `\cc` is a command of its own, not `\c` applied to `c`.
    let glued = command.is_ascii_alphabetic()
        && spaces == 0
        && bytes.get(arg).is_some_and(u8::is_ascii_alphabetic);
    if let Some((base, len)) = accent_base(bytes, arg + spaces).filter(|_| !glued) {
        return Some(Accent {
            len: arg + spaces + len - at,
            command,
            base,
        });
    }
    if bytes.get(arg) != Some(&b'{') {
        return None;
    }
    let (base, len) = accent_base(bytes, arg + 1)?;
    let close = arg + 1 + len;
    (bytes.get(close) == Some(&b'}')).then_some(Accent {
        len: close + 1 - at,
        command,
        base,
    })
}

/// The `{\"a}` form of [`accent`].
pub(crate) fn accent_in_braces(source: &str, at: usize) -> Option<Accent> {
    let bytes = source.as_bytes();
    if bytes.get(at) != Some(&b'{') {
        return None;
    }
    let inner = accent(source, at + 1)?;
    let close = at + 1 + inner.len;
    (bytes.get(close) == Some(&b'}')).then_some(Accent {
        len: inner.len + 2,
        ..inner
    })
}

fn is_line_char(ch: char) -> bool {
    !matches!(ch, '\n' | '\r')
}

/// `\verb|...|` with any delimiter, on a single line. The starred form
/// falls back to `*` as the delimiter when no closing delimiter follows.
pub(crate) fn verb(source: &str, at: usize) -> Option<usize> {
    let rest = source.get(at..)?;
    let body = rest.strip_prefix("\\verb")?;
    let with_star = body.strip_prefix('*').map(|b| (b, 6));
    with_star
        .into_iter()
        .chain(Some((body, 5)))
        .find_map(|(body, skip)| {
            let mut chars = body.char_indices();
            let (_, delim) = chars.next()?;
            if !is_line_char(delim) {
                return None;
            }
            chars
                .take_while(|(_, c)| is_line_char(*c))
                .find(|(_, c)| *c == delim)
                .map(|(i, c)| skip + i + c.len_utf8())
        })
}

/// `<<label>>=` opening an embedded code chunk.
pub(crate) fn chunk_begin(source: &str, at: usize) -> Option<usize> {
    let rest = source.get(at..)?.strip_prefix("<<")?;
    let line = rest.split(['\n', '\r']).next().unwrap_or_default();
    line.find(">>=").map(|i| i + 5)
}

/// Whether `raw` contains a blank line: two consecutive line breaks of the
/// same style. Spaces between them or a comment line do not count.
pub(crate) fn has_blank_line(raw: &str) -> bool {
    ["\n\n", "\r\n\r\n", "\r\r"].iter().any(|pair| raw.contains(pair))
}
