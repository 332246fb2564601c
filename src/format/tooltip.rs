//! Structured tooltip content attached to formatted rows.
//!
//! A tooltip is an ordered list of lines. Lines that evaluate to `None`
//! during construction are dropped, which lets formatters express
//! conditional rows without imperative branching.

use alloy_primitives::I256;
use serde::{Deserialize, Serialize};

/// Visual state of a span or key/value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    Success,
    Error,
    Muted,
}

/// A styled fragment of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LineState>,
}

impl Span {
    pub fn new(text: impl Into<String>, state: Option<LineState>) -> Self {
        Span {
            text: text.into(),
            state,
        }
    }
}

/// One tooltip line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Line {
    /// Plain sentence.
    Text { text: String },
    /// Styled fragments rendered on one line.
    Spans { spans: Vec<Span> },
    /// Key/value row; the state colors the value.
    KeyValue {
        key: String,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<LineState>,
    },
    /// Blank separator between logical groups.
    Blank,
}

impl Line {
    pub fn text(text: impl Into<String>) -> Self {
        Line::Text { text: text.into() }
    }

    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Line::KeyValue {
            key: key.into(),
            value: value.into(),
            state: None,
        }
    }

    pub fn key_value_state(
        key: impl Into<String>,
        value: impl Into<String>,
        state: Option<LineState>,
    ) -> Self {
        Line::KeyValue {
            key: key.into(),
            value: value.into(),
            state,
        }
    }

    pub fn span(text: impl Into<String>, state: Option<LineState>) -> Self {
        Line::Spans {
            spans: vec![Span::new(text, state)],
        }
    }
}

/// Ordered tooltip content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent(pub Vec<Line>);

impl TooltipContent {
    pub fn lines(&self) -> &[Line] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the value of a key/value row by key.
    pub fn value_of(&self, wanted: &str) -> Option<&str> {
        self.0.iter().find_map(|line| match line {
            Line::KeyValue { key, value, .. } if key == wanted => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Assemble tooltip content from conditional entries, dropping `None`s.
pub fn build_lines(entries: Vec<Option<Line>>) -> TooltipContent {
    TooltipContent(entries.into_iter().flatten().collect())
}

/// Sign-based visual classification used for PnL, fees and price impact.
///
/// Positive is success, negative is error, zero or absent is unstyled.
pub fn classify_by_sign(value: Option<I256>) -> Option<LineState> {
    let value = value?;
    if value.is_positive() {
        Some(LineState::Success)
    } else if value.is_negative() {
        Some(LineState::Error)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::numeric::{expand_decimals, signed};

    #[test]
    fn test_classify_by_sign() {
        let one = signed(expand_decimals(1, 30));
        assert_eq!(classify_by_sign(Some(one)), Some(LineState::Success));
        assert_eq!(classify_by_sign(Some(-one)), Some(LineState::Error));
        assert_eq!(classify_by_sign(Some(I256::ZERO)), None);
        assert_eq!(classify_by_sign(None), None);
    }

    #[test]
    fn test_build_lines_drops_absent_entries() {
        let content = build_lines(vec![
            Some(Line::text("first")),
            None,
            Some(Line::Blank),
            None,
            Some(Line::key_value("Key", "Value")),
        ]);
        assert_eq!(content.lines().len(), 3);
        assert_eq!(content.value_of("Key"), Some("Value"));
    }

    #[test]
    fn test_value_of_missing_key() {
        let content = build_lines(vec![Some(Line::text("only text"))]);
        assert_eq!(content.value_of("Key"), None);
    }

    #[test]
    fn test_line_serialization_tagged() {
        let line = Line::key_value_state("PnL", "-$5.00", Some(LineState::Error));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"], "keyValue");
        assert_eq!(json["state"], "error");
    }
}
