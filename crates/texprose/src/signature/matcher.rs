//! Longest-match selection among signatures sharing a name.
//!
//! Invariants
//! - Matching never fails loudly: an unterminated or mismatched delimiter
//!   rejects that one candidate and nothing else.
//! - A candidate matches all of its arguments or none; there is no partial
//!   credit.
//! - A comment directly before an argument is skipped, whitespace is not.

use core::ops::Range;

use super::{ArgumentKind, CommandSignature, EnvironmentSignature};
use crate::lexeme;

/// Anything that can be matched as a command followed by arguments.
pub trait Signature {
    /// The command half of the signature.
    fn command(&self) -> &CommandSignature;

    /// Wins ties against candidates that consume the same input.
    fn ignores_all_arguments(&self) -> bool {
        false
    }
}

impl Signature for CommandSignature {
    fn command(&self) -> &CommandSignature {
        self
    }
}

impl Signature for EnvironmentSignature {
    fn command(&self) -> &CommandSignature {
        self.opening()
    }

    fn ignores_all_arguments(&self) -> bool {
        EnvironmentSignature::ignores_all_arguments(self)
    }
}

/// A candidate that matched, with the source range it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMatch<'r, S> {
    /// The winning signature.
    pub signature: &'r S,
    /// Consumed source range, starting at the command.
    pub range: Range<usize>,
}

impl<S> SignatureMatch<'_, S> {
    /// Number of bytes consumed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Always `false`; a match includes at least the command name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Scans one balanced argument of `kind` starting at `from`, returning its
/// exclusive end.
///
/// Backslash escapes the next char. Braces and brackets nest through an
/// explicit stack and must close in order; parentheses do not nest and only
/// close a parenthesis argument at the top level.
#[must_use]
pub fn match_argument(source: &str, from: usize, kind: ArgumentKind) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(from) != Some(&kind.open()) {
        return None;
    }
    let mut stack = vec![kind];
    let mut pos = from + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() => pos += 1,
            b'{' => stack.push(ArgumentKind::Brace),
            b'[' => stack.push(ArgumentKind::Bracket),
            b @ (b'}' | b']') => {
                let closing = if b == b'}' {
                    ArgumentKind::Brace
                } else {
                    ArgumentKind::Bracket
                };
                if stack.last() != Some(&closing) {
                    return None;
                }
                if stack.len() == 1 {
                    return Some(pos + 1);
                }
                stack.pop();
            }
            b')' if stack == [ArgumentKind::Parenthesis] => return Some(pos + 1),
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Matches `signature` at `from`, returning the exclusive end of its last
/// argument.
#[must_use]
pub fn match_at(signature: &CommandSignature, source: &str, from: usize) -> Option<usize> {
    if !source.get(from..)?.starts_with(signature.name()) {
        return None;
    }
    let mut pos = from + signature.name().len();
    for kind in signature.arguments() {
        pos += lexeme::comment(source, pos).unwrap_or(0);
        pos = match_argument(source, pos, *kind)?;
    }
    Some(pos)
}

/// Picks the candidate consuming the most input at `from`.
///
/// Ties go to a candidate that ignores all arguments, then to the one listed
/// last, so user extensions registered after the defaults override them.
#[must_use]
pub fn match_longest<'r, S: Signature>(
    candidates: &'r [S],
    source: &str,
    from: usize,
) -> Option<SignatureMatch<'r, S>> {
    let mut best: Option<SignatureMatch<'r, S>> = None;
    for candidate in candidates {
        let Some(end) = match_at(candidate.command(), source, from) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(current) => {
                let len = end - from;
                len > current.len()
                    || (len == current.len()
                        && (candidate.ignores_all_arguments()
                            || !current.signature.ignores_all_arguments()))
            }
        };
        if better {
            best = Some(SignatureMatch {
                signature: candidate,
                range: from..end,
            });
        }
    }
    best
}
