//! JSON report generator.

use super::{root_children, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::DiffNode;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, diff: &DiffNode, _config: &ReportConfig) -> Result<String, ReportError> {
        root_children(diff)?;
        let rendered = if self.pretty {
            serde_json::to_string_pretty(diff)
        } else {
            serde_json::to_string(diff)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use crate::model::Node;
    use serde_json::json;

    #[test]
    fn test_compact_output() {
        let diff = compare(
            &Node::from(json!({"a": 1, "n": {"x": true}})),
            &Node::from(json!({"a": 1.5, "n": {"x": true}})),
        )
        .expect("diff");
        let out = JsonReporter::new()
            .pretty(false)
            .generate(&diff, &ReportConfig::default())
            .expect("render");
        assert_eq!(
            out,
            r#"{"type":"root","children":[{"type":"changed","key":"a","oldValue":1,"newValue":1.5},{"type":"nested","key":"n","children":[{"type":"unchanged","key":"x","value":true}]}]}"#
        );
    }

    #[test]
    fn test_pretty_output_is_valid_json() {
        let diff = DiffNode::Root {
            children: vec![DiffNode::Removed {
                key: "gone".into(),
                value: Node::Null,
            }],
        };
        let out = JsonReporter::new()
            .generate(&diff, &ReportConfig::default())
            .expect("render");
        assert!(out.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["children"][0]["type"], "removed");
    }
}
