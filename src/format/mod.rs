//! Shared formatting primitives: numbers, timestamps, tooltip lines.

pub mod numbers;
pub mod timestamp;
pub mod tooltip;

pub use timestamp::{format_timestamp, format_timestamp_iso};
pub use tooltip::{build_lines, classify_by_sign, Line, LineState, Span, TooltipContent};
