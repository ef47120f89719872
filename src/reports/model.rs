//! Typed schema for evaluation documents produced by the upstream pipeline.
//!
//! Deserializing into these types is the validation step at the load
//! boundary: a document missing a required field fails to parse and is
//! skipped by the loader instead of crashing the renderer later. Numeric
//! fields are trusted verbatim; nothing here recomputes or cross-checks
//! scores, totals, or percentages.

use std::fmt;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One loaded report: the parsed document plus display metadata.
#[derive(Clone, Debug)]
pub struct Report {
    /// Source location of the JSON file; unique within a loaded set.
    pub path: PathBuf,
    /// Final path segment, used as display label and sort/filter key.
    /// Names may collide when two paths share a tail segment; no
    /// de-duplication is performed.
    pub name: String,
    /// The parsed evaluation document.
    pub data: EvaluationDocument,
}

/// A single evaluation output for one transcript.
#[derive(Clone, Debug, Deserialize)]
pub struct EvaluationDocument {
    /// Name of the transcript the upstream pipeline scored.
    pub transcript_filename: String,
    /// Unix seconds; absent sorts and renders as 0.
    #[serde(default)]
    pub timestamp: f64,
    /// Section key to section, in document order.
    pub sections: SectionMap,
    /// Aggregate block summarizing all sections.
    pub aggregated: Aggregated,
}

/// Overall weighted result for one document.
#[derive(Clone, Debug, Deserialize)]
pub struct Aggregated {
    /// Weighted percentage over all sections; 0-100 expected, not enforced.
    pub final_weighted_score: f64,
}

/// Ordered `section key -> section` mapping.
///
/// JSON object order is meaningful for rendering, so entries live in a
/// vector rather than an associative container.
#[derive(Clone, Debug, Default)]
pub struct SectionMap(pub Vec<SectionEntry>);

impl SectionMap {
    /// Iterate sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry> {
        self.0.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document carries no sections.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One named section paired with its key.
#[derive(Clone, Debug)]
pub struct SectionEntry {
    /// Section key, rendered verbatim as the card title.
    pub key: String,
    /// The section body.
    pub section: Section,
}

/// A named grouping of related metrics with a subtotal score.
#[derive(Clone, Debug, Deserialize)]
pub struct Section {
    /// Sum of metric scores, as computed upstream.
    pub total_score: f64,
    /// Sum of metric maxima, as computed upstream.
    pub max_score: f64,
    /// Pre-computed upstream; trusted verbatim, never recomputed.
    pub percentage: f64,
    /// Metrics in their original sequence order.
    pub metrics: Vec<Metric>,
}

/// A single scored evaluation criterion.
#[derive(Clone, Debug, Deserialize)]
pub struct Metric {
    /// Metric name; underscores display as spaces.
    pub name: String,
    /// Awarded score.
    pub score: f64,
    /// Maximum attainable score.
    pub max: f64,
    /// Short reasoning from the evaluator; absent, null, and empty all
    /// mean "no comment".
    pub comments: Option<String>,
    /// Verbatim transcript excerpt backing the score; absent, null, and
    /// empty all mean "no proof".
    pub proof: Option<String>,
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionMapVisitor;

        impl<'de> Visitor<'de> for SectionMapVisitor {
            type Value = SectionMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of section name to section")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, section)) = access.next_entry::<String, Section>()? {
                    entries.push(SectionEntry { key, section });
                }
                Ok(SectionMap(entries))
            }
        }

        deserializer.deserialize_map(SectionMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_preserve_document_order() {
        let raw = r#"{
            "transcript_filename": "call.txt",
            "timestamp": 1700000000,
            "sections": {
                "zeta": {"total_score": 1, "max_score": 2, "percentage": 50, "metrics": []},
                "alpha": {"total_score": 3, "max_score": 4, "percentage": 75, "metrics": []}
            },
            "aggregated": {"final_weighted_score": 62.5}
        }"#;
        let doc: EvaluationDocument = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = doc.sections.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        // No `sections` key: rejected at the load boundary.
        let raw = r#"{
            "transcript_filename": "call.txt",
            "aggregated": {"final_weighted_score": 10.0}
        }"#;
        assert!(serde_json::from_str::<EvaluationDocument>(raw).is_err());
    }

    #[test]
    fn optional_fields_tolerate_absent_and_null() {
        let raw = r#"{
            "transcript_filename": "call.txt",
            "sections": {
                "quality": {
                    "total_score": 5, "max_score": 10, "percentage": 50,
                    "metrics": [
                        {"name": "tone", "score": 5, "max": 10, "proof": null}
                    ]
                }
            },
            "aggregated": {"final_weighted_score": 50.0}
        }"#;
        let doc: EvaluationDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.timestamp, 0.0);
        let metric = &doc.sections.0[0].section.metrics[0];
        assert!(metric.comments.is_none());
        assert!(metric.proof.is_none());
    }
}
