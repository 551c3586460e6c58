//! Merging spans with plain-text gaps for display

use crate::model::EditableSpan;
use crate::text::Text;

/// One display run
///
/// Segments partition the text in order. Plain runs stay addressable per
/// character through [`Text`], which is what lets the host map a user
/// selection back to exact offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unannotated text covering `[start, end)`
    Text { start: usize, end: usize },
    /// An entity span covering `[start, end)`
    Entity {
        id: u64,
        start: usize,
        end: usize,
        label: String,
        editing: bool,
    },
}

impl Segment {
    pub fn start(&self) -> usize {
        match self {
            Segment::Text { start, .. } | Segment::Entity { start, .. } => *start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Segment::Text { end, .. } | Segment::Entity { end, .. } => *end,
        }
    }
}

/// Merge the span set with its plain-text gaps, in offset order
///
/// Spans are stable-sorted by start, so two spans sharing a start keep
/// their relative order. A span starting before the walk cursor would
/// overlap an already emitted segment and is skipped; the store keeps its
/// set disjoint, so that path only matters for sets built elsewhere.
pub fn compose(text: &Text, spans: &[EditableSpan]) -> Vec<Segment> {
    let mut ordered: Vec<&EditableSpan> = spans.iter().collect();
    ordered.sort_by_key(|s| s.start);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for span in ordered {
        if span.start < cursor {
            continue;
        }
        if cursor < span.start {
            segments.push(Segment::Text {
                start: cursor,
                end: span.start,
            });
        }
        segments.push(Segment::Entity {
            id: span.id,
            start: span.start,
            end: span.end,
            label: span.label.clone(),
            editing: span.editing,
        });
        cursor = span.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Text {
            start: cursor,
            end: text.len(),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: u64, start: usize, end: usize, label: &str) -> EditableSpan {
        EditableSpan {
            id,
            start,
            end,
            label: label.to_string(),
            pending_label: label.to_string(),
            editing: false,
        }
    }

    fn reassemble(text: &Text, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| text.slice(s.start(), s.end()))
            .collect()
    }

    #[test]
    fn test_segments_partition_the_text() {
        let text = Text::new("The quick fox jumps");
        let spans = vec![span(0, 4, 9, "ORG"), span(1, 14, 19, "MISC")];

        let segments = compose(&text, &spans);
        assert_eq!(
            segments,
            vec![
                Segment::Text { start: 0, end: 4 },
                Segment::Entity {
                    id: 0,
                    start: 4,
                    end: 9,
                    label: "ORG".to_string(),
                    editing: false
                },
                Segment::Text { start: 9, end: 14 },
                Segment::Entity {
                    id: 1,
                    start: 14,
                    end: 19,
                    label: "MISC".to_string(),
                    editing: false
                },
            ]
        );
        assert_eq!(reassemble(&text, &segments), "The quick fox jumps");
    }

    #[test]
    fn test_no_spans_is_one_text_segment() {
        let text = Text::new("plain");
        assert_eq!(compose(&text, &[]), vec![Segment::Text { start: 0, end: 5 }]);
        assert!(compose(&Text::new(""), &[]).is_empty());
    }

    #[test]
    fn test_adjacent_spans_have_no_gap_segment() {
        let text = Text::new("abcdef");
        let spans = vec![span(0, 0, 3, "A"), span(1, 3, 6, "B")];
        let segments = compose(&text, &spans);
        assert_eq!(segments.len(), 2);
        assert_eq!(reassemble(&text, &segments), "abcdef");
    }

    #[test]
    fn test_span_covering_whole_text() {
        let text = Text::new("whole");
        let segments = compose(&text, &[span(0, 0, 5, "A")]);
        assert_eq!(segments.len(), 1);
        assert_eq!(reassemble(&text, &segments), "whole");
    }

    #[test]
    fn test_unsorted_input_is_ordered_by_start() {
        let text = Text::new("a b c d");
        let spans = vec![span(1, 4, 5, "B"), span(0, 0, 1, "A")];
        let segments = compose(&text, &spans);
        let starts: Vec<usize> = segments.iter().map(Segment::start).collect();
        assert_eq!(starts, vec![0, 1, 4, 5]);
        assert_eq!(reassemble(&text, &segments), "a b c d");
    }

    #[test]
    fn test_overlapping_span_is_skipped() {
        let text = Text::new("abcdef");
        // second span starts inside the first; the earlier span wins
        let spans = vec![span(0, 0, 4, "A"), span(1, 2, 6, "B")];
        let segments = compose(&text, &spans);
        assert_eq!(
            segments,
            vec![
                Segment::Entity {
                    id: 0,
                    start: 0,
                    end: 4,
                    label: "A".to_string(),
                    editing: false
                },
                Segment::Text { start: 4, end: 6 },
            ]
        );
    }
}
