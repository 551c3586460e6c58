pub mod label;
pub mod span;

pub use label::{LabelSet, FALLBACK_LABEL};
pub use span::{EditableSpan, Span};
