//! Line/column positions for a whole document.
//!
//! Lines are separated by `\n`, `\r\n` or a lone `\r`. Columns are byte
//! offsets from the line start. Conversions in both directions are total:
//! out-of-range input clamps to the nearest valid position, since hosts may
//! pass coordinates from a buffer that changed since they were computed.

/// A zero-based line and column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Zero-based line.
    pub line: usize,
    /// Byte offset from the start of the line.
    pub column: usize,
}

impl Position {
    /// A position on `line` at `column`.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Precomputed line boundaries of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPositions {
    /// Offset of the first byte of each line. Never empty.
    starts: Vec<usize>,
    /// Offset where each line's content ends, before its line break.
    ends: Vec<usize>,
    len: usize,
}

impl DocumentPositions {
    /// Indexes the lines of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut starts = vec![0];
        let mut ends = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let br = match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
                b'\r' | b'\n' => 1,
                _ => {
                    i += 1;
                    continue;
                }
            };
            ends.push(i);
            i += br;
            starts.push(i);
        }
        ends.push(bytes.len());
        Self {
            starts,
            ends,
            len: bytes.len(),
        }
    }

    /// Number of lines. An empty document has one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The position of byte `offset`. Offsets past the end map to the end
    /// of the last line.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.starts.partition_point(|start| *start <= offset) - 1;
        Position::new(line, offset - self.starts[line])
    }

    /// The byte offset of `position`.
    ///
    /// A line past the end maps to the document end. A column past the end
    /// of its line maps to the end of the line's content, before the line
    /// break.
    #[must_use]
    pub fn offset(&self, position: Position) -> usize {
        let Some(&start) = self.starts.get(position.line) else {
            return self.len;
        };
        let next = self.starts.get(position.line + 1).copied().unwrap_or(self.len);
        if position.column >= next - start {
            self.ends[position.line]
        } else {
            start + position.column
        }
    }

    /// Like [`offset`](Self::offset) for coordinates that may be negative,
    /// as some editor protocols allow. A negative line maps to the start of
    /// the document, a negative column to the start of its line.
    #[must_use]
    pub fn offset_clamped(&self, line: i64, column: i64) -> usize {
        let Ok(line) = usize::try_from(line) else {
            return 0;
        };
        match usize::try_from(column) {
            Ok(column) => self.offset(Position::new(line, column)),
            Err(_) => self.starts.get(line).copied().unwrap_or(self.len),
        }
    }
}
