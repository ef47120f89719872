//! Helpers that shape loaded reports into render-ready structs.
//!
//! Everything the card renderer prints is formatted here so the formatting
//! rules stay testable without an egui context: two-decimal aggregate
//! scores, verbatim section badges, underscore-to-space metric names, the
//! no-proof placeholder, and local-time timestamps.

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

use crate::reports::model::{Metric, Report, SectionEntry};

/// Placeholder shown when a metric carries no transcript evidence.
pub const NO_PROOF_PLACEHOLDER: &str = "No proof available";

/// Render-ready card for one report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportCard {
    /// Report filename (derived display name).
    pub name: String,
    /// Transcript the document scores.
    pub transcript: String,
    /// Local date/time the evaluation ran.
    pub evaluated_at: String,
    /// Aggregate score, exactly two decimals with a `%` suffix.
    pub score_label: String,
    /// Bar fill fraction in `[0, 1]`. The printed label is never clamped;
    /// only the painted bar is, so out-of-range scores cannot overflow the
    /// card.
    pub score_fill: f32,
    /// Sections in document order.
    pub sections: Vec<SectionView>,
}

/// Render-ready section block.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    /// Section key, verbatim.
    pub title: String,
    /// `total/max (pct%)` with numbers verbatim.
    pub badge: String,
    /// Metrics in sequence order.
    pub metrics: Vec<MetricView>,
}

/// Render-ready metric row.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricView {
    /// Metric name with underscores shown as spaces.
    pub name: String,
    /// Evaluator comments; empty when absent.
    pub comments: String,
    /// Quoted proof excerpt, or [`NO_PROOF_PLACEHOLDER`].
    pub proof: String,
    /// Whether a non-empty proof was present.
    pub has_proof: bool,
    /// Awarded score, verbatim.
    pub score: String,
    /// Maximum score, verbatim.
    pub max: String,
}

/// Build the card model for one loaded report.
pub fn report_card(report: &Report) -> ReportCard {
    let data = &report.data;
    ReportCard {
        name: report.name.clone(),
        transcript: data.transcript_filename.clone(),
        evaluated_at: format_timestamp(data.timestamp),
        score_label: score_label(data.aggregated.final_weighted_score),
        score_fill: score_fill(data.aggregated.final_weighted_score),
        sections: data.sections.iter().map(section_view).collect(),
    }
}

/// Exactly two decimals with a percent suffix.
pub fn score_label(score: f64) -> String {
    format!("{score:.2}%")
}

/// Fraction of the aggregate bar to fill, clamped to `[0, 1]`.
pub fn score_fill(score: f64) -> f32 {
    (score / 100.0).clamp(0.0, 1.0) as f32
}

fn section_view(entry: &SectionEntry) -> SectionView {
    let section = &entry.section;
    SectionView {
        title: entry.key.clone(),
        badge: format!(
            "{}/{} ({}%)",
            display_number(section.total_score),
            display_number(section.max_score),
            display_number(section.percentage)
        ),
        metrics: section.metrics.iter().map(metric_view).collect(),
    }
}

fn metric_view(metric: &Metric) -> MetricView {
    let proof = metric.proof.as_deref().filter(|proof| !proof.is_empty());
    MetricView {
        name: metric.name.replace('_', " "),
        comments: metric.comments.clone().unwrap_or_default(),
        proof: proof
            .map(|proof| format!("\u{201c}{proof}\u{201d}"))
            .unwrap_or_else(|| NO_PROOF_PLACEHOLDER.to_string()),
        has_proof: proof.is_some(),
        score: display_number(metric.score),
        max: display_number(metric.max),
    }
}

/// Shortest decimal rendering of an f64 ("7", "83.5"), matching how the
/// documents' own numbers read.
fn display_number(value: f64) -> String {
    format!("{value}")
}

/// Local date/time for a Unix-seconds timestamp, UTC when no local offset
/// resolves. Fractional seconds survive the conversion.
pub fn format_timestamp(seconds: f64) -> String {
    let nanos = (seconds * 1_000_000_000.0) as i128;
    let moment = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    format_datetime(moment.to_offset(offset))
}

fn format_datetime(moment: OffsetDateTime) -> String {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    moment
        .format(DISPLAY_FORMAT)
        .unwrap_or_else(|_| moment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::model::{
        Aggregated, EvaluationDocument, Section, SectionMap,
    };
    use std::path::PathBuf;

    fn metric(name: &str, proof: Option<&str>) -> Metric {
        Metric {
            name: name.to_string(),
            score: 7.0,
            max: 10.0,
            comments: Some("fine".to_string()),
            proof: proof.map(|p| p.to_string()),
        }
    }

    fn report_with(score: f64, sections: Vec<SectionEntry>) -> Report {
        Report {
            path: PathBuf::from("Call_42.json"),
            name: "Call_42.json".to_string(),
            data: EvaluationDocument {
                transcript_filename: "Call_42.txt".to_string(),
                timestamp: 1_700_000_000.0,
                sections: SectionMap(sections),
                aggregated: Aggregated {
                    final_weighted_score: score,
                },
            },
        }
    }

    #[test]
    fn score_label_renders_exactly_two_decimals() {
        assert_eq!(score_label(0.0), "0.00%");
        assert_eq!(score_label(100.0), "100.00%");
        assert_eq!(score_label(83.456), "83.46%");
    }

    #[test]
    fn score_fill_clamps_only_the_bar() {
        assert_eq!(score_fill(120.0), 1.0);
        assert_eq!(score_fill(-5.0), 0.0);
        assert!((score_fill(83.456) - 0.83456).abs() < 1e-6);
        // The label stays verbatim even when the bar clamps.
        assert_eq!(score_label(120.0), "120.00%");
    }

    #[test]
    fn metric_name_replaces_all_underscores() {
        let view = metric_view(&metric("turn_taking_accuracy", None));
        assert_eq!(view.name, "turn taking accuracy");
    }

    #[test]
    fn absent_null_and_empty_proof_use_the_placeholder() {
        for proof in [None, Some("")] {
            let view = metric_view(&metric("tone", proof));
            assert_eq!(view.proof, NO_PROOF_PLACEHOLDER);
            assert!(!view.has_proof);
        }
    }

    #[test]
    fn present_proof_renders_quoted() {
        let view = metric_view(&metric("tone", Some("I can help with that.")));
        assert_eq!(view.proof, "\u{201c}I can help with that.\u{201d}");
        assert!(view.has_proof);
    }

    #[test]
    fn section_badge_uses_verbatim_numbers() {
        let entry = SectionEntry {
            key: "quality".to_string(),
            section: Section {
                total_score: 7.0,
                max_score: 10.0,
                percentage: 70.0,
                metrics: vec![],
            },
        };
        assert_eq!(section_view(&entry).badge, "7/10 (70%)");
    }

    #[test]
    fn card_preserves_section_order() {
        let entries = ["zeta", "alpha"]
            .into_iter()
            .map(|key| SectionEntry {
                key: key.to_string(),
                section: Section {
                    total_score: 1.0,
                    max_score: 2.0,
                    percentage: 50.0,
                    metrics: vec![],
                },
            })
            .collect();
        let card = report_card(&report_with(50.0, entries));
        let titles: Vec<&str> = card.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["zeta", "alpha"]);
    }

    #[test]
    fn datetime_formats_as_date_and_time() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(format_datetime(fixed), "2023-11-14 22:13:20");
    }

    #[test]
    fn absent_timestamp_still_renders() {
        // Absent timestamps default to 0 and render as the epoch rather
        // than crashing the card.
        let rendered = format_timestamp(0.0);
        assert_eq!(rendered.len(), "1970-01-01 00:00:00".len());
    }
}
