//! Host bridge wired to the filesystem

use std::path::PathBuf;

use marker_core::{spans_to_json, HostBridge, Span};

/// Persists every committed span set to a JSON file
///
/// This is the embedding application's side of the widget contract:
/// whatever the store emits lands in `~/.marker/spans.json`, ready for
/// whoever consumes the annotations. Writes are fire-and-forget; a
/// failed write never interrupts the session.
pub struct FileBridge {
    path: PathBuf,
}

impl FileBridge {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HostBridge for FileBridge {
    fn spans_changed(&mut self, spans: &[Span]) {
        if let Ok(json) = spans_to_json(spans) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}
