//! Selection model: ordered disjoint spans over one snapshot.

use crate::span::CharSpan;

/// The set of text ranges currently selected in an editor view.
///
/// Spans are kept sorted and disjoint. A set holding exactly one zero-length span represents a
/// bare caret with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    spans: Vec<CharSpan>,
}

impl SelectionSet {
    /// Build a selection set, normalizing the given spans.
    ///
    /// Spans are sorted by start offset, overlapping spans are merged to their union, and exact
    /// duplicates are dropped. Touching spans (one ends where the next starts) are kept separate.
    pub fn new(spans: Vec<CharSpan>) -> Self {
        Self {
            spans: normalize_spans(spans),
        }
    }

    /// A set containing a single caret at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            spans: vec![CharSpan::caret(offset)],
        }
    }

    /// The normalized spans, in document order.
    pub fn spans(&self) -> &[CharSpan] {
        &self.spans
    }

    /// Number of spans in the set.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the set holds no spans at all.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns `true` iff the selection consists of exactly one zero-length span.
    ///
    /// Any multi-span set, and any set with selected content, reports `false` - even when only
    /// one span is present.
    pub fn is_caret_only(&self) -> bool {
        self.spans.len() == 1 && self.spans[0].is_empty()
    }

    /// Iterate over the spans in document order.
    pub fn iter(&self) -> impl Iterator<Item = &CharSpan> {
        self.spans.iter()
    }
}

impl From<CharSpan> for SelectionSet {
    fn from(span: CharSpan) -> Self {
        Self::new(vec![span])
    }
}

fn normalize_spans(mut spans: Vec<CharSpan>) -> Vec<CharSpan> {
    if spans.is_empty() {
        return spans;
    }

    spans.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));

    // Merge overlapping spans (half-open: do not merge when the next starts exactly at the
    // current end).
    let mut merged: Vec<CharSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        let Some(last) = merged.last_mut() else {
            merged.push(span);
            continue;
        };

        if span.start < last.end {
            last.end = last.end.max(span.end);
        } else if span == *last {
            // Exact duplicate - drop.
        } else {
            merged.push(span);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_only_single_empty_span() {
        assert!(SelectionSet::caret(5).is_caret_only());
    }

    #[test]
    fn test_caret_only_rejects_content_and_multi_span() {
        assert!(!SelectionSet::from(CharSpan::new(0, 3)).is_caret_only());
        let multi = SelectionSet::new(vec![CharSpan::caret(1), CharSpan::caret(5)]);
        assert_eq!(multi.len(), 2);
        assert!(!multi.is_caret_only());
    }

    #[test]
    fn test_normalize_sorts_and_merges_overlapping() {
        let set = SelectionSet::new(vec![
            CharSpan::new(10, 14),
            CharSpan::new(0, 4),
            CharSpan::new(2, 6),
        ]);
        assert_eq!(set.spans(), &[CharSpan::new(0, 6), CharSpan::new(10, 14)]);
    }

    #[test]
    fn test_normalize_keeps_touching_spans_separate() {
        let set = SelectionSet::new(vec![CharSpan::new(0, 4), CharSpan::new(4, 8)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_drops_duplicate_carets() {
        let set = SelectionSet::new(vec![CharSpan::caret(3), CharSpan::caret(3)]);
        assert_eq!(set.spans(), &[CharSpan::caret(3)]);
        assert!(set.is_caret_only());
    }
}
