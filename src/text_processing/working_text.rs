use regex::{Captures, Regex};
use std::ops::Range;

use super::span_tracker::SpanTracker;
use crate::error::StageError;
use crate::models::{Change, RuleKind};

/// A requested rewrite of working-text bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range in the current working text
    pub range: Range<usize>,
    pub replacement: String,
    pub kind: RuleKind,
}

impl Edit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
struct Segment {
    text: String,
    /// Byte range this segment came from in the original text
    original: Range<usize>,
    /// Set once a stage has produced this text
    locked: Option<RuleKind>,
}

/// Text being normalized, with provenance for every byte
///
/// The text is a sequence of segments. Raw segments are untouched slices of
/// the original; locked segments hold stage output and map back to the
/// original span they replaced. Because edits may only land inside a raw
/// segment, the original spans of recorded changes never overlap.
#[derive(Debug, Clone)]
pub struct WorkingText {
    original: String,
    segments: Vec<Segment>,
    text: String,
    tracker: SpanTracker,
    changes: Vec<Change>,
}

impl WorkingText {
    pub fn new(original: &str) -> Self {
        let segments = if original.is_empty() {
            Vec::new()
        } else {
            vec![Segment {
                text: original.to_string(),
                original: 0..original.len(),
                locked: None,
            }]
        };

        Self {
            original: original.to_string(),
            segments,
            text: original.to_string(),
            tracker: SpanTracker::new(),
            changes: Vec::new(),
        }
    }

    /// Current working text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn tracker(&self) -> &SpanTracker {
        &self.tracker
    }

    pub fn is_locked(&self, range: &Range<usize>) -> bool {
        self.tracker.is_locked(range)
    }

    /// Consume into the final text and the ordered change list
    pub fn into_parts(self) -> (String, Vec<Change>) {
        (self.text, self.changes)
    }

    /// Collect edits for every match of `regex` that avoids locked text
    ///
    /// `rewrite` sees each candidate match and returns the edit to make, or
    /// `None` to leave it. A match overlapping a lock is retried one char
    /// further on; a declined match is skipped entirely.
    pub fn scan<F>(&self, regex: &Regex, mut rewrite: F) -> Vec<Edit>
    where
        F: FnMut(&Captures<'_>) -> Option<Edit>,
    {
        let text = self.text.as_str();
        let mut edits: Vec<Edit> = Vec::new();
        let mut pos = 0;
        let mut claimed = 0;

        while pos <= text.len() {
            let Some(caps) = regex.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let range = whole.range();

            if range.start < claimed || self.tracker.is_locked(&range) {
                pos = next_boundary(text, range.start);
                continue;
            }

            if let Some(edit) = rewrite(&caps) {
                let usable = edit.range.start >= claimed
                    && edit.range.end <= text.len()
                    && !self.tracker.is_locked(&edit.range)
                    && text.get(edit.range.clone()) != Some(edit.replacement.as_str());
                if usable {
                    claimed = edit.range.end;
                    edits.push(edit);
                }
            }

            pos = if range.is_empty() {
                next_boundary(text, range.end)
            } else {
                range.end
            };
        }

        edits
    }

    /// Apply a batch of non-overlapping edits and lock their output
    ///
    /// Nothing changes if any edit is out of bounds, overlaps another edit,
    /// or touches locked text.
    pub fn apply(
        &mut self,
        mut edits: Vec<Edit>,
        processor: &'static str,
    ) -> Result<usize, StageError> {
        if edits.is_empty() {
            return Ok(0);
        }
        edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

        for (i, edit) in edits.iter().enumerate() {
            let Range { start, end } = edit.range;
            if start > end
                || end > self.text.len()
                || !self.text.is_char_boundary(start)
                || !self.text.is_char_boundary(end)
            {
                return Err(StageError::InvalidRange { start, end });
            }
            if i > 0 && edits[i - 1].range.end > start {
                return Err(StageError::InvalidRange { start, end });
            }
            if self.tracker.is_locked(&edit.range) {
                return Err(StageError::LockedSpan { start, end });
            }
        }

        let count = edits.len();
        let mut pending = edits.into_iter().peekable();
        let mut segments = Vec::with_capacity(self.segments.len() + count * 2);
        let mut new_changes = Vec::with_capacity(count);
        let mut seg_start = 0;

        for segment in &self.segments {
            let seg_end = seg_start + segment.text.len();

            if segment.locked.is_some() {
                segments.push(segment.clone());
                seg_start = seg_end;
                continue;
            }

            let mut cursor = 0;
            while let Some(edit) = pending.peek() {
                let starts_later = edit.range.start > seg_end
                    || (edit.range.start == seg_end && !edit.range.is_empty());
                if starts_later {
                    break;
                }
                if edit.range.end > seg_end {
                    return Err(StageError::LockedSpan {
                        start: edit.range.start,
                        end: edit.range.end,
                    });
                }
                let Some(edit) = pending.next() else { break };
                let local = edit.range.start - seg_start..edit.range.end - seg_start;
                let original_span =
                    segment.original.start + local.start..segment.original.start + local.end;

                push_raw(&mut segments, segment, cursor..local.start);
                new_changes.push(Change {
                    span: original_span.clone(),
                    original: segment.text[local.clone()].to_string(),
                    replacement: edit.replacement.clone(),
                    rule_kind: edit.kind,
                    processor_name: processor,
                });
                segments.push(Segment {
                    text: edit.replacement,
                    original: original_span,
                    locked: Some(edit.kind),
                });
                cursor = local.end;
            }
            push_raw(&mut segments, segment, cursor..segment.text.len());
            seg_start = seg_end;
        }

        if let Some(edit) = pending.next() {
            return Err(StageError::InvalidRange {
                start: edit.range.start,
                end: edit.range.end,
            });
        }

        self.segments = segments;
        self.changes.extend(new_changes);
        self.rebuild();
        Ok(count)
    }

    fn rebuild(&mut self) {
        let mut text = String::with_capacity(self.text.len());
        let mut tracker = SpanTracker::new();
        for segment in &self.segments {
            let start = text.len();
            text.push_str(&segment.text);
            if segment.locked.is_some() {
                // Segments are laid out in order, so locking cannot fail
                let _ = tracker.lock(start..text.len());
            }
        }
        self.text = text;
        self.tracker = tracker;
    }
}

fn push_raw(segments: &mut Vec<Segment>, source: &Segment, local: Range<usize>) {
    if local.is_empty() {
        return;
    }
    segments.push(Segment {
        text: source.text[local.clone()].to_string(),
        original: source.original.start + local.start..source.original.start + local.end,
        locked: None,
    });
}

/// Byte index of the char after the one starting at `pos`
pub fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |ch| pos + ch.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(range: Range<usize>, replacement: &str) -> Edit {
        Edit::new(range, replacement, RuleKind::Symbol)
    }

    #[test]
    fn test_new_text_is_unlocked() {
        let wt = WorkingText::new("hello world");
        assert_eq!(wt.text(), "hello world");
        assert!(wt.tracker().is_empty());
        assert!(wt.changes().is_empty());
    }

    #[test]
    fn test_apply_records_original_spans() {
        let mut wt = WorkingText::new("a & b & c");
        wt.apply(vec![edit(2..3, "and"), edit(6..7, "and")], "symbols")
            .unwrap();

        assert_eq!(wt.text(), "a and b and c");
        assert_eq!(wt.changes().len(), 2);
        assert_eq!(wt.changes()[0].span, 2..3);
        assert_eq!(wt.changes()[1].span, 6..7);
        assert_eq!(wt.changes()[1].original, "&");
        assert_eq!(wt.changes()[1].processor_name, "symbols");
        assert!(wt.is_locked(&(2..5)));
        assert!(!wt.is_locked(&(0..2)));
    }

    #[test]
    fn test_second_pass_maps_through_earlier_edits() {
        let mut wt = WorkingText::new("x & y = z");
        wt.apply(vec![edit(2..3, "and")], "symbols").unwrap();
        // "x and y = z": '=' now sits at byte 8
        wt.apply(vec![edit(8..9, "equals")], "symbols").unwrap();

        assert_eq!(wt.text(), "x and y equals z");
        assert_eq!(wt.changes()[1].span, 6..7);
        assert_eq!(&wt.original()[6..7], "=");
    }

    #[test]
    fn test_locked_edit_rejected_without_changes() {
        let mut wt = WorkingText::new("50% off");
        wt.apply(vec![edit(0..3, "fifty percent")], "numeric").unwrap();
        let before = wt.text().to_string();

        let result = wt.apply(vec![edit(6..13, "per cent")], "symbols");

        assert!(matches!(result, Err(StageError::LockedSpan { .. })));
        assert_eq!(wt.text(), before);
        assert_eq!(wt.changes().len(), 1);
    }

    #[test]
    fn test_overlapping_edits_rejected() {
        let mut wt = WorkingText::new("abcdef");
        let result = wt.apply(vec![edit(0..3, "x"), edit(2..4, "y")], "test");
        assert!(matches!(result, Err(StageError::InvalidRange { .. })));
        assert_eq!(wt.text(), "abcdef");
    }

    #[test]
    fn test_out_of_bounds_and_char_boundary() {
        let mut wt = WorkingText::new("caf\u{e9}");
        assert!(wt.apply(vec![edit(0..10, "x")], "test").is_err());
        assert!(wt.apply(vec![edit(4..5, "x")], "test").is_err());
    }

    #[test]
    fn test_edit_right_after_deletion() {
        let mut wt = WorkingText::new("co\u{ad}operate");
        wt.apply(vec![edit(2..4, "")], "symbols").unwrap();
        wt.apply(vec![edit(2..5, "OPE")], "test").unwrap();

        assert_eq!(wt.text(), "coOPErate");
        assert_eq!(wt.changes()[1].span, 4..7);
    }

    #[test]
    fn test_deletion_leaves_zero_length_lock() {
        let mut wt = WorkingText::new("co\u{ad}operate");
        wt.apply(vec![edit(2..4, "")], "symbols").unwrap();

        assert_eq!(wt.text(), "cooperate");
        assert!(wt.is_locked(&(0..9)));
        assert!(!wt.is_locked(&(2..9)));
        assert_eq!(wt.changes()[0].span, 2..4);
    }

    #[test]
    fn test_scan_skips_locked_matches() {
        let mut wt = WorkingText::new("5 and 7");
        wt.apply(vec![edit(0..1, "five")], "numeric").unwrap();
        let re = Regex::new(r"\d|five").unwrap();

        let edits = wt.scan(&re, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), "N", RuleKind::Numeric))
        });

        assert_eq!(edits.len(), 1);
        assert_eq!(&wt.text()[edits[0].range.clone()], "7");
    }

    #[test]
    fn test_scan_retries_after_locked_prefix() {
        let mut wt = WorkingText::new("ab cd");
        wt.apply(vec![edit(0..1, "xy")], "test").unwrap();
        let re = Regex::new(r"[a-z]+").unwrap();

        let edits = wt.scan(&re, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), m.as_str().to_uppercase(), RuleKind::Symbol))
        });

        let texts: Vec<&str> = edits.iter().map(|e| &wt.text()[e.range.clone()]).collect();
        assert_eq!(texts, vec!["b", "cd"]);
    }

    #[test]
    fn test_scan_drops_identity_edits() {
        let wt = WorkingText::new("bass");
        let re = Regex::new(r"bass").unwrap();
        let edits = wt.scan(&re, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), "bass", RuleKind::Homograph))
        });
        assert!(edits.is_empty());
    }

    #[test]
    fn test_changes_never_overlap_in_original() {
        let mut wt = WorkingText::new("a + b = c & d");
        let re = Regex::new(r"[+=&]").unwrap();
        let edits = wt.scan(&re, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), "op", RuleKind::Symbol))
        });
        wt.apply(edits, "symbols").unwrap();
        let re = Regex::new(r"[a-z]+").unwrap();
        let edits = wt.scan(&re, |caps| {
            let m = caps.get(0)?;
            Some(Edit::new(m.range(), m.as_str().to_uppercase(), RuleKind::Symbol))
        });
        wt.apply(edits, "upper").unwrap();

        assert_eq!(wt.text(), "A op B op C op D");
        let mut spans: Vec<Range<usize>> = wt.changes().iter().map(|c| c.span.clone()).collect();
        spans.sort_by_key(|s| s.start);
        assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
    }
}
