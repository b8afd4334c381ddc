//! Plain report generator.
//!
//! One sentence per changed property, addressed by its dotted key path.

use super::{root_children, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DiffNode, Node};

/// Plain text reporter
pub struct PlainReporter;

impl PlainReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PlainReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_value(value: &Node) -> String {
    match value {
        Node::Mapping(_) | Node::List(_) => "[complex value]".to_string(),
        Node::String(s) => format!("'{s}'"),
        Node::Null => "null".to_string(),
        Node::Bool(b) => b.to_string(),
        Node::Number(n) => n.to_string(),
    }
}

fn collect_lines(
    entries: &[DiffNode],
    prefix: &str,
    include_unchanged: bool,
    lines: &mut Vec<String>,
) {
    for entry in entries {
        let Some(key) = entry.key() else {
            collect_lines(entry.children(), prefix, include_unchanged, lines);
            continue;
        };
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match entry {
            DiffNode::Added { value, .. } => lines.push(format!(
                "Property '{path}' was added with value: {}",
                plain_value(value)
            )),
            DiffNode::Removed { .. } => lines.push(format!("Property '{path}' was removed")),
            DiffNode::Changed {
                old_value,
                new_value,
                ..
            } => lines.push(format!(
                "Property '{path}' was updated. From {} to {}",
                plain_value(old_value),
                plain_value(new_value)
            )),
            DiffNode::Unchanged { .. } if include_unchanged => {
                lines.push(format!("Property '{path}' was unchanged"));
            }
            DiffNode::Nested { children, .. } => {
                collect_lines(children, &path, include_unchanged, lines);
            }
            DiffNode::Unchanged { .. } | DiffNode::Root { .. } => {}
        }
    }
}

impl ReportGenerator for PlainReporter {
    fn generate(&self, diff: &DiffNode, config: &ReportConfig) -> Result<String, ReportError> {
        let children = root_children(diff)?;
        let mut lines = Vec::new();
        collect_lines(children, "", config.include_unchanged, &mut lines);
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use serde_json::json;

    fn diff_of(left: serde_json::Value, right: serde_json::Value) -> DiffNode {
        compare(&Node::from(left), &Node::from(right)).expect("diff")
    }

    #[test]
    fn test_nested_paths() {
        let diff = diff_of(
            json!({
                "common": {"setting2": 200, "setting3": true, "setting6": {"key": "value", "doge": {"wow": ""}}},
                "group2": {"abc": 12345}
            }),
            json!({
                "common": {"follow": false, "setting3": null, "setting6": {"key": "value", "doge": {"wow": "so much"}}},
                "group3": {"deep": {"id": 45}}
            }),
        );
        let out = PlainReporter::new()
            .generate(&diff, &ReportConfig::default())
            .expect("render");
        insta::assert_snapshot!(out, @r"
        Property 'common.follow' was added with value: false
        Property 'common.setting2' was removed
        Property 'common.setting3' was updated. From true to null
        Property 'common.setting6.doge.wow' was updated. From '' to 'so much'
        Property 'group2' was removed
        Property 'group3' was added with value: [complex value]
        ");
    }

    #[test]
    fn test_lists_are_complex() {
        let diff = diff_of(json!({"l": [1]}), json!({"l": [1, 2]}));
        let out = PlainReporter::new()
            .generate(&diff, &ReportConfig::default())
            .expect("render");
        assert_eq!(
            out,
            "Property 'l' was updated. From [complex value] to [complex value]"
        );
    }

    #[test]
    fn test_unchanged_listed_on_request() {
        let diff = diff_of(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 3}));
        let config = ReportConfig {
            include_unchanged: true,
            ..Default::default()
        };
        let out = PlainReporter::new().generate(&diff, &config).expect("render");
        assert_eq!(
            out,
            "Property 'a' was unchanged\nProperty 'b' was updated. From 2 to 3"
        );
    }

    #[test]
    fn test_identical_documents_render_empty() {
        let diff = diff_of(json!({"a": {"b": 1}}), json!({"a": {"b": 1}}));
        let out = PlainReporter::new()
            .generate(&diff, &ReportConfig::default())
            .expect("render");
        assert!(out.is_empty());
    }
}
