//! YAML document parser.

use super::traits::{DocumentFormat, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::{Mapping, Node};
use serde_yaml::Value;

/// Parser for YAML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<Node, ParseError> {
        if content.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        let value: Value = serde_yaml::from_str(content)?;
        convert_value(value)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        if trimmed.is_empty() {
            return FormatDetection::no_match();
        }
        if trimmed.starts_with("---") {
            return FormatDetection::with_confidence(FormatConfidence::HIGH);
        }
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            // Flow style is valid YAML, but JSON is the likelier reading.
            return FormatDetection::with_confidence(FormatConfidence::LOW);
        }
        let has_key_line = trimmed
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.starts_with('#'))
            .any(|line| line.contains(": ") || line.ends_with(':'));
        if has_key_line {
            FormatDetection::with_confidence(FormatConfidence::MEDIUM)
        } else {
            FormatDetection::with_confidence(FormatConfidence::LOW)
                .warning("no 'key: value' lines found")
        }
    }
}

/// Convert a YAML value into the generic tree.
fn convert_value(value: Value) -> Result<Node, ParseError> {
    match value {
        Value::Null => Ok(Node::Null),
        Value::Bool(b) => Ok(Node::Bool(b)),
        Value::Number(n) => convert_number(&n).map(Node::Number),
        Value::String(s) => Ok(Node::String(s)),
        Value::Sequence(items) => items
            .into_iter()
            .map(convert_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::List),
        Value::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (key, value) in map {
                let key = convert_key(key)?;
                if out.contains_key(&key) {
                    return Err(ParseError::DuplicateKey(key));
                }
                let value = convert_value(value)?;
                out.insert(key, value);
            }
            Ok(Node::Mapping(out))
        }
        Value::Tagged(tagged) => convert_value(tagged.value),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Result<serde_json::Number, ParseError> {
    if let Some(u) = n.as_u64() {
        Ok(u.into())
    } else if let Some(i) = n.as_i64() {
        Ok(i.into())
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .ok_or_else(|| ParseError::InvalidValue(format!("non-finite number {n}")))
    }
}

/// Mapping keys must end up as strings; scalar keys are stringified.
fn convert_key(key: Value) -> Result<String, ParseError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => convert_key(tagged.value),
        Value::Null => Err(ParseError::UnsupportedKey("null".to_string())),
        Value::Sequence(_) => Err(ParseError::UnsupportedKey("sequence".to_string())),
        Value::Mapping(_) => Err(ParseError::UnsupportedKey("mapping".to_string())),
    }
}
