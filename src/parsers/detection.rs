//! Centralized format detection for document parsers.
//!
//! The file extension decides when it is recognized. Otherwise each parser
//! scores the content and the most confident one wins.

use super::traits::{DocumentFormat, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use super::{JsonParser, YamlParser};
use crate::model::Node;
use std::path::Path;

/// Minimum confidence threshold for accepting a format detection.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Result of format detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// The format that should handle this content, if detected.
    pub format: Option<DocumentFormat>,
    /// Confidence level of the detection.
    pub confidence: FormatConfidence,
    /// Any warnings about the detection.
    pub warnings: Vec<String>,
}

impl DetectionResult {
    /// Create a result indicating no format was detected.
    #[must_use]
    pub fn unknown(reason: &str) -> Self {
        Self {
            format: None,
            confidence: FormatConfidence::NONE,
            warnings: vec![reason.to_string()],
        }
    }

    fn detected(format: DocumentFormat, detection: FormatDetection) -> Self {
        Self {
            format: Some(format),
            confidence: detection.confidence,
            warnings: detection.warnings,
        }
    }

    /// Check if the detection is confident enough to parse.
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.format.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Centralized format detector for document content.
pub struct FormatDetector {
    json: JsonParser,
    yaml: YamlParser,
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a new format detector with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            json: JsonParser::new(),
            yaml: YamlParser::new(),
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Create a format detector with a custom confidence threshold.
    #[must_use]
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    /// Detect format from full content string.
    #[must_use]
    pub fn detect_from_content(&self, content: &str) -> DetectionResult {
        let json = self.json.detect(content);
        let yaml = self.yaml.detect(content);
        self.select_best_parser(json, yaml)
    }

    /// Prefer the extension of `path`, falling back to content detection.
    #[must_use]
    pub fn detect(&self, path: &Path, content: &str) -> DetectionResult {
        match DocumentFormat::from_path(path) {
            Some(format) => DetectionResult::detected(
                format,
                FormatDetection::with_confidence(FormatConfidence::CERTAIN),
            ),
            None => {
                tracing::debug!(
                    "No known extension on {}, detecting format from content",
                    path.display()
                );
                self.detect_from_content(content)
            }
        }
    }

    fn select_best_parser(&self, json: FormatDetection, yaml: FormatDetection) -> DetectionResult {
        let json_conf = json.confidence.value();
        let yaml_conf = yaml.confidence.value();

        tracing::debug!(
            "Format detection: JSON={:.2}, YAML={:.2}, threshold={:.2}",
            json_conf,
            yaml_conf,
            self.min_confidence
        );

        // JSON is also valid YAML, so ties go to JSON.
        if json_conf >= self.min_confidence && json_conf >= yaml_conf {
            DetectionResult::detected(DocumentFormat::Json, json)
        } else if yaml_conf >= self.min_confidence {
            DetectionResult::detected(DocumentFormat::Yaml, yaml)
        } else {
            DetectionResult::unknown("Could not detect document format with sufficient confidence")
        }
    }

    /// Parse content with the parser for `format`.
    pub fn parse_as(&self, format: DocumentFormat, content: &str) -> Result<Node, ParseError> {
        match format {
            DocumentFormat::Json => self.json.parse_str(content),
            DocumentFormat::Yaml => self.yaml.parse_str(content),
        }
    }

    /// Detect the format from content and parse it.
    pub fn parse_str(&self, content: &str) -> Result<Node, ParseError> {
        self.parse_detected(self.detect_from_content(content), content)
    }

    /// Parse content read from `path`, choosing the parser with [`Self::detect`].
    pub fn parse_file_content(&self, path: &Path, content: &str) -> Result<Node, ParseError> {
        self.parse_detected(self.detect(path, content), content)
    }

    fn parse_detected(&self, detection: DetectionResult, content: &str) -> Result<Node, ParseError> {
        let format = detection
            .format
            .filter(|_| detection.can_parse())
            .ok_or_else(|| ParseError::UnknownFormat(detection.warnings.join("; ")))?;
        self.parse_as(format, content)
    }
}
