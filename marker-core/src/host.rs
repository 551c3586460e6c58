//! The contract between the engine and its embedding application

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Span;

/// Narrow interface the embedding application implements
///
/// `spans_changed` fires once per store operation with the committed span
/// set in exchange form; `layout_changed` asks the host to re-measure
/// whatever surface it renders the widget into. Both are fire-and-forget
/// from the store's point of view.
pub trait HostBridge {
    fn spans_changed(&mut self, spans: &[Span]);

    fn layout_changed(&mut self) {}
}

/// Bridge that ignores every notification, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBridge;

impl HostBridge for NullBridge {
    fn spans_changed(&mut self, _spans: &[Span]) {}
}

/// Everything the host supplies at construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
    /// Allowed labels; order defines preference and the first entry is
    /// the default for freshly created spans
    #[serde(default)]
    pub labels: Vec<String>,
    /// Label to color, presentation only; lookups ignore label case
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub options: Options,
}

/// Presentation switches with documented defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Hide the boundary nudge controls. The store operations stay
    /// available either way; this only suppresses their presentation.
    #[serde(default)]
    pub disable_boundary_controls: bool,
}

/// Parse a host config from its JSON form
pub fn widget_config_from_json(json: &str) -> Result<WidgetConfig> {
    serde_json::from_str(json).context("Failed to parse widget config")
}

/// Encode a committed span list in the canonical exchange form
pub fn spans_to_json(spans: &[Span]) -> Result<String> {
    serde_json::to_string_pretty(spans).context("Failed to serialize spans")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = widget_config_from_json(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(config.text, "hello");
        assert!(config.spans.is_empty());
        assert!(config.labels.is_empty());
        assert!(config.colors.is_empty());
        assert!(!config.options.disable_boundary_controls);
    }

    #[test]
    fn test_config_field_names_are_camel_case() {
        let config = widget_config_from_json(
            r##"{
                "text": "The quick fox",
                "spans": [{"start": 4, "end": 9, "label": "ORG"}],
                "labels": ["PERSON", "ORG"],
                "colors": {"ORG": "#89b4fa"},
                "options": {"disableBoundaryControls": true}
            }"##,
        )
        .unwrap();
        assert_eq!(config.spans, vec![Span::new(4, 9, "ORG")]);
        assert_eq!(config.labels, vec!["PERSON", "ORG"]);
        assert!(config.options.disable_boundary_controls);
    }

    #[test]
    fn test_malformed_config_reports_context() {
        let err = widget_config_from_json("not json").unwrap_err();
        assert!(err.to_string().contains("widget config"));
    }

    #[test]
    fn test_spans_json_is_the_exchange_form() {
        let json = spans_to_json(&[Span::new(0, 3, "PERSON")]).unwrap();
        assert!(json.contains("\"start\": 0"));
        assert!(json.contains("\"end\": 3"));
        assert!(json.contains("\"label\": \"PERSON\""));
        // internal editing state never appears
        assert!(!json.contains("editing"));
        assert!(!json.contains("id"));
    }
}
