//! The span store: the one place widget state changes

use chrono::{DateTime, Utc};

use crate::boundary::{self, Direction};
use crate::compose::{compose, Segment};
use crate::host::{HostBridge, WidgetConfig};
use crate::model::{EditableSpan, LabelSet, Span};
use crate::selection;
use crate::text::Text;

/// Editable span set for one widget instance
///
/// All mutation goes through the methods here, and every operation ends
/// with one emission of the committed span set through the host bridge,
/// whether or not it changed anything. Bad input is a silent no-op rather
/// than an error: the committed set always satisfies
/// `0 <= start < end <= text length`, spans stay mutually disjoint, and
/// ids are never reused.
pub struct SpanStore {
    text: Text,
    labels: LabelSet,
    spans: Vec<EditableSpan>,
    next_id: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    bridge: Box<dyn HostBridge>,
}

impl SpanStore {
    /// Build a store from the host config
    ///
    /// Seed spans are dropped when their label is outside the allowed
    /// set, their offsets do not fit the text, or they overlap an earlier
    /// seed. The bridge gets one emission reflecting the seeded set.
    pub fn new(config: WidgetConfig, bridge: Box<dyn HostBridge>) -> Self {
        let now = Utc::now();
        let mut store = Self {
            text: Text::new(config.text),
            labels: LabelSet::new(config.labels, config.colors),
            spans: Vec::new(),
            next_id: 0,
            created_at: now,
            updated_at: now,
            bridge,
        };
        for span in config.spans {
            store.seed(span);
        }
        store.emit();
        store
    }

    fn seed(&mut self, span: Span) {
        if !span.in_bounds(self.text.len()) || !self.labels.contains(&span.label) {
            return;
        }
        if self.overlaps_other(None, span.start, span.end) {
            return;
        }
        let id = self.alloc_id();
        self.spans.push(EditableSpan {
            id,
            start: span.start,
            end: span.end,
            pending_label: span.label.clone(),
            label: span.label,
            editing: false,
        });
    }

    /// Create a span from an inclusive selection pair
    ///
    /// The new span takes the default label and opens directly in label
    /// editing so the user picks or confirms a label immediately. Nothing
    /// is created for a missing, empty, or out-of-bounds selection, or
    /// when the span would overlap an existing one. The caller should
    /// clear the platform selection afterwards.
    pub fn create_from_selection(&mut self, first: Option<usize>, last: Option<usize>) -> bool {
        let created = match selection::span_bounds(&self.text, first, last) {
            Some((start, end)) if !self.overlaps_other(None, start, end) => {
                let label = self.labels.default_label().to_string();
                let id = self.alloc_id();
                self.spans.push(EditableSpan {
                    id,
                    start,
                    end,
                    label: label.clone(),
                    pending_label: label,
                    editing: true,
                });
                self.touch();
                true
            }
            _ => false,
        };
        self.emit();
        created
    }

    /// Flip label editing for a span
    ///
    /// Entering copies the committed label into the pending slot; leaving
    /// this way discards the pending value without committing it.
    pub fn toggle_edit(&mut self, id: u64) -> bool {
        let mut changed = false;
        if let Some(span) = self.spans.iter_mut().find(|s| s.id == id) {
            span.editing = !span.editing;
            span.pending_label = span.label.clone();
            changed = true;
        }
        if changed {
            self.touch();
        }
        self.emit();
        changed
    }

    /// Stage a label while editing
    ///
    /// Ignored outside editing and for labels outside the allowed set.
    /// The committed label is untouched until approval.
    pub fn set_pending_label(&mut self, id: u64, label: &str) -> bool {
        let mut changed = false;
        if self.labels.contains(label) {
            if let Some(span) = self.spans.iter_mut().find(|s| s.id == id) {
                if span.editing && span.pending_label != label {
                    span.pending_label = label.to_string();
                    changed = true;
                }
            }
        }
        if changed {
            self.touch();
        }
        self.emit();
        changed
    }

    /// Commit the pending label and leave editing
    ///
    /// The only operation that changes a committed label.
    pub fn approve(&mut self, id: u64) -> bool {
        let mut changed = false;
        if let Some(span) = self.spans.iter_mut().find(|s| s.id == id) {
            if span.editing {
                span.label = span.pending_label.clone();
                span.editing = false;
                changed = true;
            }
        }
        if changed {
            self.touch();
        }
        self.emit();
        changed
    }

    /// Move a span's start one word left or right
    ///
    /// No-op at a limit and when the move would run into another span.
    /// Label and editing state are untouched.
    pub fn adjust_start(&mut self, id: u64, direction: Direction) -> bool {
        let mut changed = false;
        if let Some(i) = self.index_of(id) {
            let (start, end) = (self.spans[i].start, self.spans[i].end);
            let mut new_start = match direction {
                Direction::Left => boundary::move_start_left(&self.text, start),
                Direction::Right => boundary::move_start_right(&self.text, start, end),
            };
            if new_start >= end {
                new_start = end - 1;
            }
            if new_start != start && !self.overlaps_other(Some(id), new_start, end) {
                self.spans[i].start = new_start;
                self.touch();
                changed = true;
            }
        }
        self.emit();
        changed
    }

    /// Move a span's end one word left or right
    ///
    /// No-op at a limit and when the move would run into another span.
    /// Label and editing state are untouched.
    pub fn adjust_end(&mut self, id: u64, direction: Direction) -> bool {
        let mut changed = false;
        if let Some(i) = self.index_of(id) {
            let (start, end) = (self.spans[i].start, self.spans[i].end);
            let mut new_end = match direction {
                Direction::Left => boundary::move_end_left(&self.text, start, end),
                Direction::Right => boundary::move_end_right(&self.text, start, end),
            };
            if new_end <= start {
                new_end = start + 1;
            }
            if new_end != end && !self.overlaps_other(Some(id), start, new_end) {
                self.spans[i].end = new_end;
                self.touch();
                changed = true;
            }
        }
        self.emit();
        changed
    }

    /// Delete a span, whatever its editing state
    pub fn remove(&mut self, id: u64) -> bool {
        let mut changed = false;
        if let Some(i) = self.index_of(id) {
            self.spans.remove(i);
            self.touch();
            changed = true;
        }
        self.emit();
        changed
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn spans(&self) -> &[EditableSpan] {
        &self.spans
    }

    pub fn span(&self, id: u64) -> Option<&EditableSpan> {
        self.spans.iter().find(|s| s.id == id)
    }

    /// The span currently open in the label editor, if any
    pub fn editing_span(&self) -> Option<&EditableSpan> {
        self.spans.iter().find(|s| s.editing)
    }

    /// Spans in display order (ascending start, insertion-stable)
    pub fn ordered(&self) -> Vec<&EditableSpan> {
        let mut spans: Vec<&EditableSpan> = self.spans.iter().collect();
        spans.sort_by_key(|s| s.start);
        spans
    }

    /// Committed spans in exchange form, in display order
    pub fn committed(&self) -> Vec<Span> {
        self.ordered().into_iter().map(EditableSpan::committed).collect()
    }

    /// Display segments for the current span set
    pub fn segments(&self) -> Vec<Segment> {
        compose(&self.text, &self.spans)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.spans.iter().position(|s| s.id == id)
    }

    fn overlaps_other(&self, id: Option<u64>, start: usize, end: usize) -> bool {
        self.spans
            .iter()
            .any(|s| Some(s.id) != id && s.intersects(start, end))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn emit(&mut self) {
        let committed = self.committed();
        self.bridge.spans_changed(&committed);
        self.bridge.layout_changed();
    }
}
