//! Annotated text: the span list produced by one scan, the plain text derived
//! from it, and the offset mapping that ties the two together.
//!
//! What it does
//! - [`AnnotatedTextBuilder`] records spans in source order. A text span is
//!   checked verbatim; a markup span is hidden from the checker and replaced
//!   by its interpretation (usually empty, sometimes a placeholder word).
//! - [`AnnotatedText`] is the frozen result. It answers plain -> source
//!   queries, and [`AnnotatedText::invert`] derives an [`InverseMapping`] for
//!   source -> plain queries.
//!
//! Invariants
//! - Spans tile the fragment: concatenating every span's raw slice yields the
//!   scanned source exactly.
//! - No span has an empty raw slice.
//! - Breakpoint `0` is the origin `(0, 0)` and breakpoint `i + 1` closes span
//!   `i`. Breakpoints are non-decreasing in both coordinates.
//!
//! All offsets are UTF-8 byte offsets relative to the fragment start unless a
//! method says otherwise.

use core::ops::Range;

/// One unit of annotated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Source text that is also checkable plain text.
    Text(String),
    /// Source text replaced by `interpreted` in the plain text.
    Markup {
        /// The source slice.
        raw: String,
        /// What the checker sees instead. May be empty.
        interpreted: String,
    },
}

impl Span {
    /// The source slice covered by this span.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Span::Text(raw) | Span::Markup { raw, .. } => raw,
        }
    }

    /// The contribution of this span to the plain text.
    #[must_use]
    pub fn plain(&self) -> &str {
        match self {
            Span::Text(raw) => raw,
            Span::Markup { interpreted, .. } => interpreted,
        }
    }

    /// Whether this span is checkable text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }
}

/// A pair of corresponding offsets in the plain text and the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Breakpoint {
    /// Offset into the plain text.
    pub plain: usize,
    /// Offset into the source fragment.
    pub source: usize,
}

/// Incrementally assembles an [`AnnotatedText`].
///
/// Consecutive text spans are merged, so scanning prose one character at a
/// time does not produce one span per character.
#[derive(Debug, Clone)]
pub struct AnnotatedTextBuilder {
    spans: Vec<Span>,
    plain: String,
    breakpoints: Vec<Breakpoint>,
    origin: usize,
}

impl Default for AnnotatedTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatedTextBuilder {
    /// A builder for a fragment that starts at the beginning of its document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_origin(0)
    }

    /// A builder for a fragment starting at byte `origin` of its document.
    #[must_use]
    pub fn with_origin(origin: usize) -> Self {
        Self {
            spans: Vec::new(),
            plain: String::new(),
            breakpoints: vec![Breakpoint::default()],
            origin,
        }
    }

    /// Appends checkable text. Empty input is ignored.
    pub fn append_text(&mut self, raw: &str) -> &mut Self {
        if raw.is_empty() {
            return self;
        }
        self.plain.push_str(raw);
        if let Some(Span::Text(last)) = self.spans.last_mut() {
            last.push_str(raw);
            let plain = self.plain.len();
            if let Some(end) = self.breakpoints.last_mut() {
                end.plain = plain;
                end.source += raw.len();
            }
        } else {
            self.spans.push(Span::Text(raw.to_owned()));
            self.close_span(raw.len());
        }
        self
    }

    /// Appends markup replaced by `interpreted`. Empty `raw` is ignored, even
    /// when `interpreted` is not.
    pub fn append_markup(&mut self, raw: &str, interpreted: &str) -> &mut Self {
        if raw.is_empty() {
            return self;
        }
        self.plain.push_str(interpreted);
        self.spans.push(Span::Markup {
            raw: raw.to_owned(),
            interpreted: interpreted.to_owned(),
        });
        self.close_span(raw.len());
        self
    }

    /// Source bytes recorded so far.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.last().source
    }

    /// Plain text accumulated so far.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    /// Freezes the current state. The builder stays usable and repeated calls
    /// return equal values.
    #[must_use]
    pub fn build(&self) -> AnnotatedText {
        AnnotatedText {
            spans: self.spans.clone(),
            plain: self.plain.clone(),
            breakpoints: self.breakpoints.clone(),
            origin: self.origin,
        }
    }

    fn last(&self) -> Breakpoint {
        self.breakpoints.last().copied().unwrap_or_default()
    }

    fn close_span(&mut self, raw_len: usize) {
        let source = self.last().source + raw_len;
        self.breakpoints.push(Breakpoint {
            plain: self.plain.len(),
            source,
        });
    }
}

/// The immutable result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedText {
    spans: Vec<Span>,
    plain: String,
    breakpoints: Vec<Breakpoint>,
    origin: usize,
}

impl AnnotatedText {
    /// The spans, in source order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text to hand to the checker.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    /// The mapping breakpoints, starting with the origin.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Byte offset of the fragment within its document.
    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Length of the scanned fragment in bytes.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.breakpoints.last().map_or(0, |b| b.source)
    }

    /// Reassembles the scanned fragment from the span raw slices.
    #[must_use]
    pub fn source_text(&self) -> String {
        self.spans.iter().map(Span::raw).collect()
    }

    /// Maps a plain offset to the lowest source offset it corresponds to.
    ///
    /// Inside interpreted markup (a placeholder, say) the result floors to the
    /// start of the markup. Offsets past the end clamp to the fragment length.
    #[must_use]
    pub fn source_offset(&self, plain: usize) -> usize {
        lookup(&self.breakpoints, |i| self.spans[i].is_text(), Axis::Plain, plain, Edge::Lowest)
    }

    /// Maps a plain range (a checker match, usually) to the source range an
    /// editor should highlight.
    ///
    /// The start skips markup that produced no plain text; the end stops
    /// before it. A range touching a placeholder covers the whole construct.
    #[must_use]
    pub fn source_range(&self, plain: Range<usize>) -> Range<usize> {
        let is_text = |i: usize| self.spans[i].is_text();
        let start = lookup(&self.breakpoints, is_text, Axis::Plain, plain.start, Edge::Start);
        let end = lookup(&self.breakpoints, is_text, Axis::Plain, plain.end, Edge::End);
        start..end.max(start)
    }

    /// Like [`source_offset`](Self::source_offset), relative to the document.
    #[must_use]
    pub fn document_offset(&self, plain: usize) -> usize {
        self.origin + self.source_offset(plain)
    }

    /// The plain text produced by the given source range.
    #[must_use]
    pub fn plain_substring(&self, source: Range<usize>) -> &str {
        let is_text = |i: usize| self.spans[i].is_text();
        let start = lookup(&self.breakpoints, is_text, Axis::Source, source.start, Edge::Start);
        let end = lookup(&self.breakpoints, is_text, Axis::Source, source.end, Edge::End);
        self.plain.get(start..end.max(start)).unwrap_or_default()
    }

    /// Derives the source -> plain mapping.
    #[must_use]
    pub fn invert(&self) -> InverseMapping {
        InverseMapping {
            breakpoints: self.breakpoints.clone(),
            text_segments: self.spans.iter().map(Span::is_text).collect(),
        }
    }

    /// Checks the structural invariants against the scanned source.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_consistency(&self, source: &str) -> Result<(), String> {
        if let Some(i) = self.spans.iter().position(|s| s.raw().is_empty()) {
            return Err(format!("span {i} has an empty raw slice"));
        }
        let rebuilt = self.source_text();
        if rebuilt != source {
            return Err(format!("spans do not tile the source: {rebuilt:?} != {source:?}"));
        }
        let plain: String = self.spans.iter().map(Span::plain).collect();
        if plain != self.plain {
            return Err(format!("plain text drifted: {plain:?} != {:?}", self.plain));
        }
        if self.breakpoints.len() != self.spans.len() + 1 {
            return Err("one breakpoint per span plus the origin".into());
        }
        if let Some(w) = self
            .breakpoints
            .windows(2)
            .find(|w| w[1].plain < w[0].plain || w[1].source < w[0].source)
        {
            return Err(format!("mapping not monotone at {:?} -> {:?}", w[0], w[1]));
        }
        Ok(())
    }
}

/// Source -> plain mapping derived from an [`AnnotatedText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseMapping {
    breakpoints: Vec<Breakpoint>,
    text_segments: Vec<bool>,
}

impl InverseMapping {
    /// Maps a source offset to the lowest plain offset at or before it.
    ///
    /// Inside markup the result floors to the plain offset where the markup's
    /// interpretation begins.
    #[must_use]
    pub fn plain_offset(&self, source: usize) -> usize {
        lookup(&self.breakpoints, |i| self.text_segments[i], Axis::Source, source, Edge::Lowest)
    }

    /// Maps a source range to the plain range it produced.
    #[must_use]
    pub fn plain_range(&self, source: Range<usize>) -> Range<usize> {
        let is_text = |i: usize| self.text_segments[i];
        let start = lookup(&self.breakpoints, is_text, Axis::Source, source.start, Edge::Start);
        let end = lookup(&self.breakpoints, is_text, Axis::Source, source.end, Edge::End);
        start..end.max(start)
    }
}

// ───────────────────────────── lookup ─────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Axis {
    Plain,
    Source,
}

impl Axis {
    fn key(self, b: &Breakpoint) -> usize {
        match self {
            Axis::Plain => b.plain,
            Axis::Source => b.source,
        }
    }

    fn other(self, b: &Breakpoint) -> usize {
        match self {
            Axis::Plain => b.source,
            Axis::Source => b.plain,
        }
    }
}

/// How ties and interior markup resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// First breakpoint on a tie, start of the segment inside markup.
    Lowest,
    /// Last breakpoint on a tie, start of the segment inside markup.
    Start,
    /// First breakpoint on a tie, end of the segment inside markup.
    End,
}

fn lookup(
    breakpoints: &[Breakpoint],
    is_text: impl Fn(usize) -> bool,
    axis: Axis,
    at: usize,
    edge: Edge,
) -> usize {
    let Some(last) = breakpoints.last() else {
        return 0;
    };
    if at > axis.key(last) {
        return axis.other(last);
    }
    let first_ge = breakpoints.partition_point(|b| axis.key(b) < at);
    let hit = &breakpoints[first_ge];
    if axis.key(hit) == at {
        if edge == Edge::Start {
            let last_eq = breakpoints.partition_point(|b| axis.key(b) <= at) - 1;
            return axis.other(&breakpoints[last_eq]);
        }
        return axis.other(hit);
    }
    // `at` lies strictly inside the segment closed by `hit`; the origin has
    // key 0, so `first_ge >= 1` here.
    let lo = &breakpoints[first_ge - 1];
    if is_text(first_ge - 1) {
        axis.other(lo) + (at - axis.key(lo))
    } else if edge == Edge::End {
        axis.other(hit)
    } else {
        axis.other(lo)
    }
}
