use serde::{Deserialize, Serialize};

/// An entity span in host exchange form
///
/// Offsets are character indices into the widget text, half-open
/// `[start, end)`. This is the shape the host supplies at load and
/// receives back on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl Span {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Whether the span is non-empty and fits a text of `len` characters
    pub fn in_bounds(&self, len: usize) -> bool {
        self.start < self.end && self.end <= len
    }

    /// Check if this span covers the given offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// A span as the store holds it
///
/// The id is scoped to one store and never leaves it. While the label
/// editor is open, `pending_label` carries the staged value; `label` only
/// changes on approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableSpan {
    pub id: u64,
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub pending_label: String,
    pub editing: bool,
}

impl EditableSpan {
    /// The host-facing form, internal state stripped
    pub fn committed(&self) -> Span {
        Span::new(self.start, self.end, self.label.clone())
    }

    /// Check if this span covers the given offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check overlap with the half-open range `[start, end)`
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check() {
        assert!(Span::new(0, 3, "PERSON").in_bounds(3));
        assert!(!Span::new(0, 4, "PERSON").in_bounds(3));
        assert!(!Span::new(2, 2, "PERSON").in_bounds(5));
        assert!(!Span::new(3, 2, "PERSON").in_bounds(5));
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = Span::new(2, 5, "ORG");
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_intersects() {
        let span = EditableSpan {
            id: 0,
            start: 2,
            end: 5,
            label: "ORG".to_string(),
            pending_label: "ORG".to_string(),
            editing: false,
        };
        assert!(span.intersects(4, 6));
        assert!(span.intersects(0, 3));
        assert!(span.intersects(0, 9));
        assert!(!span.intersects(5, 7));
        assert!(!span.intersects(0, 2));
    }

    #[test]
    fn test_committed_strips_editing_state() {
        let span = EditableSpan {
            id: 7,
            start: 1,
            end: 4,
            label: "LOC".to_string(),
            pending_label: "ORG".to_string(),
            editing: true,
        };
        assert_eq!(span.committed(), Span::new(1, 4, "LOC"));
    }

    #[test]
    fn test_span_json_shape() {
        let json = serde_json::to_string(&Span::new(4, 9, "PERSON")).unwrap();
        assert!(json.contains("\"start\":4"));
        assert!(json.contains("\"end\":9"));
        assert!(json.contains("\"label\":\"PERSON\""));
    }
}
