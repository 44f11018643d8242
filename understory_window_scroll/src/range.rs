// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Half-open interval `[start, end)` of item indices that are materialized.
///
/// A well-formed range has `start <= end`. Ranges produced by this crate are
/// additionally clamped to the data length they were computed against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderedRange {
    /// First rendered index (inclusive).
    pub start: usize,
    /// One past the last rendered index (exclusive).
    pub end: usize,
}

impl RenderedRange {
    /// The empty range at index `0`.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Creates a range from its bounds without normalizing them.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered; `0` for inverted ranges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no index is covered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` lies inside `[start, end)`.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Clamps both bounds into `[0, len]` and restores `start <= end`.
    #[must_use]
    pub fn clamp_to_len(self, len: usize) -> Self {
        let end = self.end.min(len);
        Self {
            start: self.start.min(end),
            end,
        }
    }

    /// Returns the range as a `core::ops::Range`, suitable for slicing.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for RenderedRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<RenderedRange> for Range<usize> {
    fn from(range: RenderedRange) -> Self {
        range.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderedRange;

    #[test]
    fn clamp_restores_ordering_after_shrink() {
        let range = RenderedRange::new(1490, 1500);
        assert_eq!(range.clamp_to_len(40), RenderedRange::new(40, 40));
        assert_eq!(range.clamp_to_len(1495), RenderedRange::new(1490, 1495));
        assert_eq!(range.clamp_to_len(2000), range);
    }

    #[test]
    fn inverted_ranges_are_empty() {
        let inverted = RenderedRange::new(5, 3);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
        assert!(!inverted.contains(4));
    }

    #[test]
    fn converts_to_and_from_std_range() {
        let range: RenderedRange = (3..9).into();
        assert_eq!(range.len(), 6);
        assert!(range.contains(3));
        assert!(!range.contains(9));
        let back: core::ops::Range<usize> = range.into();
        assert_eq!(back, 3..9);
    }
}
