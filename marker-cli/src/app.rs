use marker_core::{Direction, Options, SpanStore};

use crate::cursor::Cursor;

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Visual,
    LabelPicker,
    Help,
}

/// Focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Sidebar,
}

/// Host-side application state
///
/// The store owns every span; this struct only carries what the terminal
/// needs on top of it: the cursor, the visual-selection anchor, focus,
/// and picker state.
pub struct App {
    pub store: SpanStore,
    pub cursor: Cursor,
    pub title: String,
    pub mode: Mode,
    pub focus: Focus,
    pub options: Options,
    pub running: bool,

    // Selection state (inclusive char offset of the anchor)
    pub selection_anchor: Option<usize>,

    // Sidebar state
    pub sidebar_selected: usize,

    // Picker state
    pub picker_selected: usize,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: SpanStore, options: Options, title: String) -> Self {
        let cursor = Cursor::new(store.text());
        Self {
            store,
            cursor,
            title,
            mode: Mode::Normal,
            focus: Focus::Editor,
            options,
            running: true,
            selection_anchor: None,
            sidebar_selected: 0,
            picker_selected: 0,
            status_message: None,
        }
    }

    /// Enter visual mode anchored at the cursor
    pub fn enter_visual_mode(&mut self) {
        if self.store.text().is_empty() {
            return;
        }
        self.mode = Mode::Visual;
        self.selection_anchor = Some(self.cursor.offset());
    }

    pub fn cancel_visual_mode(&mut self) {
        self.mode = Mode::Normal;
        self.selection_anchor = None;
    }

    /// Inclusive selection range for highlighting
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        let head = self.cursor.offset();
        Some((anchor.min(head), anchor.max(head)))
    }

    /// Turn the visual selection into a span
    ///
    /// The selection is cleared either way so the next visual mode starts
    /// fresh. A created span opens in label editing; the caller switches
    /// to the picker.
    pub fn commit_selection(&mut self) -> bool {
        let anchor = self.selection_anchor.take();
        self.mode = Mode::Normal;
        let created = self
            .store
            .create_from_selection(anchor, Some(self.cursor.offset()));
        if created {
            self.open_label_picker();
            self.set_status("Span created");
        } else {
            self.set_status("Selection does not fit a span here");
        }
        created
    }

    /// Span id at the sidebar selection, in display order
    pub fn selected_span_id(&self) -> Option<u64> {
        self.store
            .ordered()
            .get(self.sidebar_selected)
            .map(|s| s.id)
    }

    pub fn next_span(&mut self) {
        let count = self.store.spans().len();
        if count > 0 {
            self.sidebar_selected = (self.sidebar_selected + 1) % count;
        }
    }

    pub fn prev_span(&mut self) {
        let count = self.store.spans().len();
        if count > 0 {
            self.sidebar_selected = if self.sidebar_selected == 0 {
                count - 1
            } else {
                self.sidebar_selected - 1
            };
        }
    }

    /// Open the label editor for the sidebar selection
    pub fn edit_selected_span(&mut self) {
        let Some(id) = self.selected_span_id() else {
            return;
        };
        if self.store.span(id).map(|s| s.editing) == Some(false) {
            self.store.toggle_edit(id);
        }
        self.open_label_picker();
    }

    /// Switch to the picker for whichever span is editing
    pub fn open_label_picker(&mut self) {
        let Some(span) = self.store.editing_span() else {
            return;
        };
        let labels = self.store.labels().labels();
        self.picker_selected = labels
            .iter()
            .position(|l| *l == span.pending_label)
            .unwrap_or(0);
        self.mode = Mode::LabelPicker;
    }

    /// Move the picker and stage the label under it
    pub fn pick_label(&mut self, delta: isize) {
        let labels = self.store.labels().labels().to_vec();
        if labels.is_empty() {
            return;
        }
        let count = labels.len() as isize;
        let next = (self.picker_selected as isize + delta).rem_euclid(count) as usize;
        self.picker_selected = next;
        if let Some(id) = self.store.editing_span().map(|s| s.id) {
            self.store.set_pending_label(id, &labels[next]);
        }
    }

    /// Commit the staged label and close the picker
    pub fn approve_label(&mut self) {
        if let Some(id) = self.store.editing_span().map(|s| s.id) {
            self.store.approve(id);
        }
        self.mode = Mode::Normal;
        self.set_status("Label applied");
    }

    /// Close the picker without committing
    pub fn cancel_label_edit(&mut self) {
        if let Some(id) = self.store.editing_span().map(|s| s.id) {
            self.store.toggle_edit(id);
        }
        self.mode = Mode::Normal;
    }

    /// Delete the sidebar selection
    pub fn remove_selected_span(&mut self) {
        let Some(id) = self.selected_span_id() else {
            return;
        };
        if self.store.remove(id) {
            self.clamp_sidebar();
            self.set_status("Span removed");
        }
    }

    /// Nudge a boundary of the sidebar selection by one word
    pub fn adjust_selected_span(&mut self, start: bool, direction: Direction) {
        if self.options.disable_boundary_controls {
            return;
        }
        let Some(id) = self.selected_span_id() else {
            return;
        };
        let moved = if start {
            self.store.adjust_start(id, direction)
        } else {
            self.store.adjust_end(id, direction)
        };
        if !moved {
            self.set_status("Boundary cannot move there");
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor => Focus::Sidebar,
            Focus::Sidebar => Focus::Editor,
        };
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn clamp_sidebar(&mut self) {
        let count = self.store.spans().len();
        if self.sidebar_selected >= count && count > 0 {
            self.sidebar_selected = count - 1;
        }
        if count == 0 {
            self.sidebar_selected = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marker_core::{NullBridge, Span, WidgetConfig};

    fn app() -> App {
        let config = WidgetConfig {
            text: "The quick fox".to_string(),
            spans: vec![Span::new(10, 13, "ORG")],
            labels: vec!["PERSON".to_string(), "ORG".to_string()],
            ..WidgetConfig::default()
        };
        let options = config.options;
        let store = SpanStore::new(config, Box::new(NullBridge));
        App::new(store, options, "sample".to_string())
    }

    #[test]
    fn test_visual_selection_creates_editing_span() {
        let mut app = app();
        app.enter_visual_mode();
        for _ in 0..4 {
            app.cursor.move_right();
        }
        assert_eq!(app.selection(), Some((0, 4)));

        assert!(app.commit_selection());
        assert_eq!(app.mode, Mode::LabelPicker);
        assert!(app.selection_anchor.is_none());

        let span = app.store.editing_span().unwrap();
        assert_eq!((span.start, span.end), (0, 5));
        assert_eq!(span.label, "PERSON");
    }

    #[test]
    fn test_commit_without_room_reports_failure() {
        let mut app = app();
        // land the cursor inside the seeded span
        for _ in 0..11 {
            app.cursor.move_right();
        }
        app.enter_visual_mode();
        assert!(!app.commit_selection());
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.spans().len(), 1);
    }

    #[test]
    fn test_picker_round_trip() {
        let mut app = app();
        app.edit_selected_span();
        assert_eq!(app.mode, Mode::LabelPicker);
        // seeded span carries ORG, so the picker starts there
        assert_eq!(app.picker_selected, 1);

        app.pick_label(-1);
        assert_eq!(app.store.editing_span().unwrap().pending_label, "PERSON");
        app.approve_label();
        assert_eq!(app.store.ordered()[0].label, "PERSON");
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_cancel_label_edit_keeps_committed() {
        let mut app = app();
        app.edit_selected_span();
        app.pick_label(-1);
        app.cancel_label_edit();
        assert_eq!(app.store.ordered()[0].label, "ORG");
        assert!(app.store.editing_span().is_none());
    }

    #[test]
    fn test_boundary_controls_can_be_disabled() {
        let mut app = app();
        app.options.disable_boundary_controls = true;
        app.adjust_selected_span(true, Direction::Left);
        assert_eq!(app.store.ordered()[0].start, 10);

        app.options.disable_boundary_controls = false;
        app.adjust_selected_span(true, Direction::Left);
        assert_eq!(app.store.ordered()[0].start, 4);
    }

    #[test]
    fn test_remove_clamps_sidebar() {
        let mut app = app();
        app.remove_selected_span();
        assert_eq!(app.store.spans().len(), 0);
        assert_eq!(app.sidebar_selected, 0);
        // nothing left to remove
        app.remove_selected_span();
    }
}
