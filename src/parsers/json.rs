//! JSON document parser.

use super::traits::{DocumentFormat, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::{Mapping, Node};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use std::cell::RefCell;
use std::fmt;

/// Parser for JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<Node, ParseError> {
        if content.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        let duplicate = RefCell::new(None);
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let node = NodeSeed {
            duplicate: &duplicate,
        }
        .deserialize(&mut deserializer)
        .map_err(|e| match duplicate.take() {
            Some(key) => ParseError::DuplicateKey(key),
            None => e.into(),
        })?;
        deserializer.end()?;
        Ok(node)
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn detect(&self, content: &str) -> FormatDetection {
        match content.trim_start().chars().next() {
            Some('{') => FormatDetection::with_confidence(FormatConfidence::HIGH),
            Some('[') => FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .warning("JSON document root is an array, not an object"),
            _ => FormatDetection::no_match(),
        }
    }
}

/// Builds a [`Node`] straight from the token stream, keeping object keys in
/// source order. The first repeated key is recorded in `duplicate`.
#[derive(Clone, Copy)]
struct NodeSeed<'a> {
    duplicate: &'a RefCell<Option<String>>,
}

impl<'de> DeserializeSeed<'de> for NodeSeed<'_> {
    type Value = Node;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed<'_> {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        serde_json::Number::from_f64(v)
            .map(Node::Number)
            .ok_or_else(|| E::custom(format!("non-finite number {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self)? {
            items.push(item);
        }
        Ok(Node::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut out = Mapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if out.contains_key(&key) {
                let message = format!("duplicate key `{key}`");
                *self.duplicate.borrow_mut() = Some(key);
                return Err(de::Error::custom(message));
            }
            let value = map.next_value_seed(self)?;
            out.insert(key, value);
        }
        Ok(Node::Mapping(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object() {
        let node = JsonParser::new()
            .parse_str(r#"{"host": "hexlet.io", "timeout": 50, "proxy": null}"#)
            .expect("valid JSON");
        let map = node.as_mapping().expect("mapping root");
        assert_eq!(map["host"], Node::from("hexlet.io"));
        assert_eq!(map["timeout"], Node::from(50));
        assert_eq!(map["proxy"], Node::Null);
    }

    #[test]
    fn test_object_keys_keep_source_order() {
        let node = JsonParser::new()
            .parse_str(r#"{"zeta": 1, "beta": {"y": 2, "x": 3}, "alpha": [1.5, null]}"#)
            .expect("valid JSON");
        let map = node.as_mapping().expect("mapping root");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "beta", "alpha"]);
        let nested = map["beta"].as_mapping().expect("nested mapping");
        assert_eq!(nested.keys().collect::<Vec<_>>(), ["y", "x"]);
        assert_eq!(
            map["alpha"],
            Node::List(vec![
                Node::Number(serde_json::Number::from_f64(1.5).expect("finite")),
                Node::Null
            ])
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = JsonParser::new().parse_str(r#"{"a": 1, "a": 2}"#);
        assert!(matches!(result, Err(ParseError::DuplicateKey(k)) if k == "a"));

        let nested = JsonParser::new().parse_str(r#"{"n": {"k": true, "k": false}}"#);
        assert!(matches!(nested, Err(ParseError::DuplicateKey(k)) if k == "k"));
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert!(matches!(
            JsonParser::new().parse_str("{} {}"),
            Err(ParseError::JsonError(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            JsonParser::new().parse_str("  \n"),
            Err(ParseError::EmptyDocument)
        ));
        assert!(matches!(
            JsonParser::new().parse_str("{\"a\": }"),
            Err(ParseError::JsonError(_))
        ));
    }

    #[test]
    fn test_detect() {
        let parser = JsonParser::new();
        assert_eq!(parser.confidence("  {\"a\": 1}"), FormatConfidence::HIGH);
        assert_eq!(parser.confidence("[1]"), FormatConfidence::MEDIUM);
        assert!(!parser.can_parse("a: 1"));
    }
}
