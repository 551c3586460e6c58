//! Marker Core - Platform-agnostic span annotation engine
//!
//! This crate provides the data model and offset math for the Marker
//! text-span annotation widget. A host application embeds it, supplies a
//! text plus candidate entity spans, and receives the committed span set
//! back on every change through a narrow bridge trait. It carries no
//! rendering code and works the same under a terminal host or any other
//! embedding.

pub mod boundary;
pub mod compose;
pub mod host;
pub mod model;
pub mod selection;
pub mod store;
pub mod text;

pub use boundary::Direction;
pub use compose::{compose, Segment};
pub use host::{spans_to_json, widget_config_from_json, HostBridge, NullBridge, Options, WidgetConfig};
pub use model::{EditableSpan, LabelSet, Span, FALLBACK_LABEL};
pub use store::SpanStore;
pub use text::Text;
