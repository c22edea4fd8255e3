//! Prose extraction from LaTeX for grammar and spell checking.
//!
//! [`Scanner::scan`] reads a LaTeX fragment and produces an
//! [`AnnotatedText`]: the source split into text spans, which the checker
//! sees verbatim, and markup spans, which it sees through an interpretation
//! (nothing, a space, a typographic character, or a placeholder word such as
//! `Dummy0` standing in for a citation or a formula). Offsets reported
//! against the plain text map back to the source through
//! [`AnnotatedText::source_range`], and source offsets map forward through
//! [`AnnotatedText::invert`].
//!
//! ```
//! use texprose::{ScanConfig, Scanner};
//!
//! let scanner = Scanner::new(&ScanConfig::default());
//! let source = "We have $x = 1$. See \\ref{eq}.";
//! let text = scanner.scan(source).unwrap();
//! assert_eq!(text.plain_text(), "We have Ina0. See Dummy1.");
//!
//! // "Dummy1" in the plain text covers all of `\ref{eq}` in the source.
//! let range = text.source_range(18..24);
//! assert_eq!(&source[range], "\\ref{eq}");
//! ```
//!
//! The scanner is configured once through [`ScanConfig`] (language, extra
//! command and environment signatures) and never fails on malformed input
//! unless strict mode is on. Line/column conversion for a whole document
//! lives in [`DocumentPositions`].

mod annotated;
mod error;
mod lexeme;
mod options;
pub mod placeholder;
mod position;
mod scanner;
pub mod signature;

#[cfg(test)]
mod tests;

pub use annotated::{AnnotatedText, AnnotatedTextBuilder, Breakpoint, InverseMapping, Span};
pub use error::{ScanError, StallSnapshot};
pub use options::{Dialect, ScanConfig, ScanOptions};
pub use placeholder::{PlaceholderGenerator, SentenceShape, sentence_pattern};
pub use position::{DocumentPositions, Position};
pub use scanner::{MathVowel, Mode, ModeStack, Scanner, SourceFragment};
pub use signature::{Action, ArgumentKind, CommandSignature, EnvironmentSignature, SignatureRegistry};
