//! Word-granular boundary moves for span editing
//!
//! A word is a maximal run of non-whitespace characters. Moving a span
//! boundary always lands on a word edge, so resizing never produces a
//! partial-word span. Each move is a pure function of the text and the
//! current offsets; at a limit it returns the offset unchanged.

use crate::text::Text;

/// Direction of a boundary move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// New start offset one word to the left
///
/// Steps over any whitespace before `start`, then over the word preceding
/// it, landing on that word's first character. At offset 0 the start is
/// unchanged.
pub fn move_start_left(text: &Text, start: usize) -> usize {
    if start == 0 {
        return start;
    }
    let mut i = start - 1;
    while i > 0 && text.is_whitespace(i) {
        i -= 1;
    }
    while i > 0 && !text.is_whitespace(i - 1) {
        i -= 1;
    }
    i
}

/// New start offset one word to the right, clamped below `end`
///
/// Steps over the word at `start`, then over the whitespace after it. A
/// result at or past `end` clamps to `end - 1` so the span keeps at least
/// one character.
pub fn move_start_right(text: &Text, start: usize, end: usize) -> usize {
    if start + 1 >= text.len() {
        return start;
    }
    let mut i = start;
    while i < text.len() && !text.is_whitespace(i) {
        i += 1;
    }
    while i < text.len() && text.is_whitespace(i) {
        i += 1;
    }
    if i >= end {
        end.saturating_sub(1)
    } else {
        i
    }
}

/// New end offset one word to the left, clamped above `start`
///
/// Steps back over any whitespace before `end`, then over the word,
/// landing on its first character. A result at or before `start` clamps
/// to `start + 1`. A one-character span is unchanged.
pub fn move_end_left(text: &Text, start: usize, end: usize) -> usize {
    if end <= start + 1 {
        return end;
    }
    let mut i = end - 1;
    while i > 0 && text.is_whitespace(i) {
        i -= 1;
    }
    while i > 0 && !text.is_whitespace(i - 1) {
        i -= 1;
    }
    if i <= start {
        start + 1
    } else {
        i
    }
}

/// New end offset one word to the right, clamped to the text length
///
/// Steps over the whitespace at `end`, then over the following word,
/// landing just past it. At the end of the text the end is unchanged.
pub fn move_end_right(text: &Text, start: usize, end: usize) -> usize {
    if end >= text.len() {
        return end;
    }
    let mut i = end;
    while i < text.len() && text.is_whitespace(i) {
        i += 1;
    }
    while i < text.len() && !text.is_whitespace(i) {
        i += 1;
    }
    i.min(text.len()).max(start + 1)
}
