//! Live search over the loaded report list.

use crate::reports::model::Report;

/// Return the subsequence of `reports` whose name contains `search`,
/// case-insensitively, preserving order. An empty search matches everything.
/// No match yields an empty vector, never an error.
pub fn filter_reports<'a>(reports: &'a [Report], search: &str) -> Vec<&'a Report> {
    let needle = search.to_lowercase();
    reports
        .iter()
        .filter(|report| report.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::model::{Aggregated, EvaluationDocument, SectionMap};

    fn report(name: &str) -> Report {
        Report {
            path: name.into(),
            name: name.to_string(),
            data: EvaluationDocument {
                transcript_filename: format!("{name}.txt"),
                timestamp: 0.0,
                sections: SectionMap::default(),
                aggregated: Aggregated {
                    final_weighted_score: 0.0,
                },
            },
        }
    }

    fn names(filtered: &[&Report]) -> Vec<String> {
        filtered.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let reports = vec![report("Call_42.json"), report("Call_7.json")];
        let filtered = filter_reports(&reports, "");
        assert_eq!(names(&filtered), ["Call_42.json", "Call_7.json"]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let reports = vec![report("Call_42.json"), report("Call_7.json")];
        assert_eq!(names(&filter_reports(&reports, "Call_42")), ["Call_42.json"]);
        assert_eq!(names(&filter_reports(&reports, "call_42")), ["Call_42.json"]);
        assert_eq!(names(&filter_reports(&reports, "CALL_42")), ["Call_42.json"]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let reports = vec![report("Call_42.json")];
        assert!(filter_reports(&reports, "missing").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let reports = vec![
            report("Call_42.json"),
            report("Call_7.json"),
            report("other.json"),
        ];
        let once: Vec<Report> = filter_reports(&reports, "call")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_reports(&once, "call");
        assert_eq!(
            names(&twice),
            once.iter().map(|r| r.name.clone()).collect::<Vec<_>>()
        );
    }
}
