//! Split strategy queue and chunk state for one truncation pass.
//!
//! Chunks are stored as byte offsets into the text they were split from.
//! Tokens are contiguous, so rejoining the first `k` chunks with the
//! separator is exactly the source prefix ending at chunk `k - 1`.

use unicode_segmentation::UnicodeSegmentation;

/// Separators still to try in this pass, coarsest first.
#[derive(Debug, Clone)]
pub(crate) struct SplitQueue<'a> {
    remaining: &'a [String],
}

impl<'a> SplitQueue<'a> {
    pub(crate) fn new(separators: &'a [String]) -> Self {
        Self {
            remaining: separators,
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<&'a str> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.remaining.len()
    }
}

/// The active separator's tokenization of the remaining text.
#[derive(Debug, Clone)]
pub(crate) struct ChunkState<'a> {
    separator: &'a str,
    source: String,
    /// Byte end of each remaining chunk.
    ends: Vec<usize>,
    /// Byte end of the most recently removed chunk.
    last_end: Option<usize>,
}

impl<'a> ChunkState<'a> {
    /// Split `source` on `separator`; an empty separator yields grapheme
    /// clusters.
    pub(crate) fn tokenize(source: String, separator: &'a str) -> Self {
        let ends = if separator.is_empty() {
            source
                .grapheme_indices(true)
                .map(|(start, grapheme)| start + grapheme.len())
                .collect()
        } else {
            source
                .match_indices(separator)
                .map(|(start, _)| start)
                .chain(std::iter::once(source.len()))
                .collect()
        };

        Self {
            separator,
            source,
            ends,
            last_end: None,
        }
    }

    pub(crate) fn separator(&self) -> &'a str {
        self.separator
    }

    /// Remaining chunk count.
    pub(crate) fn len(&self) -> usize {
        self.ends.len()
    }

    /// Drop the trailing chunk.
    ///
    /// Returns `false` when fewer than two chunks remain; the separator has
    /// nothing left to cut.
    pub(crate) fn cut(&mut self) -> bool {
        if self.ends.len() < 2 {
            return false;
        }
        self.last_end = self.ends.pop();
        true
    }

    /// Remaining chunks rejoined with the separator.
    pub(crate) fn joined(&self) -> &str {
        let end = self.ends.last().copied().unwrap_or(0);
        &self.source[..end]
    }

    /// Remaining chunks plus the separator and the last removed chunk.
    pub(crate) fn restored(&self) -> Option<&str> {
        self.last_end.map(|end| &self.source[..end])
    }

    /// The most recently removed chunk.
    pub(crate) fn last_chunk(&self) -> Option<&str> {
        let end = self.last_end?;
        let start = self.joined().len() + self.separator.len();
        self.source.get(start..end)
    }
}
