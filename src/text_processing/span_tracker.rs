use std::ops::Range;

use crate::error::StageError;

/// Sorted set of locked byte intervals in working-text coordinates
///
/// A locked interval is text some stage already produced; later stages may
/// read it but never rewrite it. Deleted text leaves a zero-length lock so
/// nothing can be matched across the gap it left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanTracker {
    spans: Vec<Range<usize>>,
}

impl SpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `range` touches any locked interval
    ///
    /// Intervals that merely share an endpoint with `range` do not count. A
    /// zero-length lock at `p` overlaps `s..e` when `s < p < e`.
    pub fn is_locked(&self, range: &Range<usize>) -> bool {
        // Ends are non-decreasing, so the first span ending after `range.start`
        // is the only candidate
        let idx = self.spans.partition_point(|span| span.end <= range.start);
        self.spans
            .get(idx)
            .is_some_and(|span| span.start < range.end)
    }

    /// Whether the byte at `pos` lies inside a locked interval
    pub fn contains(&self, pos: usize) -> bool {
        self.is_locked(&(pos..pos + 1))
    }

    /// Lock an interval that overlaps nothing already locked
    pub fn lock(&mut self, range: Range<usize>) -> Result<(), StageError> {
        if range.start > range.end {
            return Err(StageError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if self.is_locked(&range) {
            return Err(StageError::LockedSpan {
                start: range.start,
                end: range.end,
            });
        }
        let idx = self
            .spans
            .partition_point(|span| (span.start, span.end) <= (range.start, range.end));
        self.spans.insert(idx, range);
        Ok(())
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }
}
