use std::collections::HashMap;

/// Label given to new spans when the host supplies no label vocabulary
pub const FALLBACK_LABEL: &str = "UNLABELED";

/// The host-supplied label vocabulary and its display palette
///
/// Order matters: the first label is the default for freshly created
/// spans. Color lookups normalize the label to uppercase, so hosts can
/// key the palette in either case.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: Vec<String>,
    colors: HashMap<String, String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>, colors: HashMap<String, String>) -> Self {
        let colors = colors
            .into_iter()
            .map(|(label, color)| (label.to_uppercase(), color))
            .collect();
        Self { labels, colors }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The label applied to new spans
    pub fn default_label(&self) -> &str {
        self.labels.first().map(String::as_str).unwrap_or(FALLBACK_LABEL)
    }

    /// Host-configured color for a label, if any
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.colors.get(&label.to_uppercase()).map(String::as_str)
    }
}
