//! File I/O for the terminal host

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use marker_core::{Span, WidgetConfig};

/// Load the annotation session for a text file
///
/// A `<file>.marker.json` sidecar, when present, supplies the widget
/// config: either a full config object or a bare span array. The text
/// always comes from the file itself, and a session without labels gets
/// the default vocabulary.
pub fn load_session(path: &str) -> Result<WidgetConfig> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    let sidecar = sidecar_path(&canonical);
    let mut config = if sidecar.exists() {
        read_sidecar(&sidecar)?
    } else {
        WidgetConfig::default()
    };

    if config.labels.is_empty() {
        config.labels = default_labels();
    }
    config.text = content;
    Ok(config)
}

fn read_sidecar(path: &Path) -> Result<WidgetConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if json.trim_start().starts_with('[') {
        let spans: Vec<Span> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse span list {}", path.display()))?;
        Ok(WidgetConfig {
            spans,
            ..WidgetConfig::default()
        })
    } else {
        marker_core::widget_config_from_json(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

fn sidecar_path(file: &Path) -> PathBuf {
    let mut os = file.as_os_str().to_os_string();
    os.push(".marker.json");
    PathBuf::from(os)
}

/// Labels offered when the session names none
pub fn default_labels() -> Vec<String> {
    ["PERSON", "ORG", "LOC", "MISC"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Get the ~/.marker directory path, creating it if needed
pub fn marker_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let marker_dir = home.join(".marker");

    if !marker_dir.exists() {
        fs::create_dir_all(&marker_dir)
            .with_context(|| format!("Failed to create {}", marker_dir.display()))?;
    }

    Ok(marker_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path_appends_suffix() {
        let path = sidecar_path(Path::new("/tmp/notes.txt"));
        assert_eq!(path, PathBuf::from("/tmp/notes.txt.marker.json"));
    }

    #[test]
    fn test_default_labels_are_uppercase() {
        for label in default_labels() {
            assert_eq!(label, label.to_uppercase());
        }
    }
}
