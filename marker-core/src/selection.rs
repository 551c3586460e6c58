//! Turning a raw user selection into span bounds
//!
//! The presentation layer reports the first and last character the user
//! selected, inclusive at the character level; either marker is missing
//! when the selection did not resolve to a character. Span ends are
//! exclusive, so a successful translation is `min` / `max + 1`.

use crate::text::Text;

/// Half-open span bounds for an inclusive selection pair
///
/// Returns `None` when a marker is missing or the resulting span would be
/// empty or reach past the text; the caller creates nothing in that case.
pub fn span_bounds(text: &Text, first: Option<usize>, last: Option<usize>) -> Option<(usize, usize)> {
    let (a, b) = (first?, last?);
    let start = a.min(b);
    let end = a.max(b) + 1;
    if end <= start || end > text.len() {
        return None;
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_selection_becomes_half_open_span() {
        let text = Text::new("The quick fox");
        // covers "quick"
        assert_eq!(span_bounds(&text, Some(4), Some(8)), Some((4, 9)));
    }

    #[test]
    fn test_reversed_selection_is_normalized() {
        let text = Text::new("The quick fox");
        assert_eq!(span_bounds(&text, Some(8), Some(4)), Some((4, 9)));
    }

    #[test]
    fn test_single_character_selection() {
        let text = Text::new("The quick fox");
        assert_eq!(span_bounds(&text, Some(0), Some(0)), Some((0, 1)));
    }

    #[test]
    fn test_missing_marker_is_rejected() {
        let text = Text::new("The quick fox");
        assert_eq!(span_bounds(&text, None, Some(4)), None);
        assert_eq!(span_bounds(&text, Some(4), None), None);
        assert_eq!(span_bounds(&text, None, None), None);
    }

    #[test]
    fn test_out_of_bounds_selection_is_rejected() {
        let text = Text::new("The quick fox");
        assert_eq!(span_bounds(&text, Some(4), Some(13)), None);
        assert_eq!(span_bounds(&text, Some(50), Some(60)), None);
    }

    #[test]
    fn test_empty_text_rejects_everything() {
        let text = Text::new("");
        assert_eq!(span_bounds(&text, Some(0), Some(0)), None);
    }
}
