use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::level::{level_by_name, level_by_score};

/// Score assigned to a pollutant whose label matches no known level.
///
/// Kept distinct from Good's rank of 1: an unrecognized label means "we
/// could not score this pollutant", not "the air was clean".
pub const UNKNOWN_SCORE: u32 = 0;

/// Errors from folding a day's categories into an assessment.
#[derive(Error, Debug, PartialEq)]
pub enum AssessError {
    /// The day had no pollutant categories at all. Averaging an empty set
    /// would divide by zero, so this is rejected up front.
    #[error("no pollutant categories to assess")]
    EmptyCategories,
}

/// The aggregated result for one day of pollution readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAssessment {
    /// Numeric score per pollutant (level rank, or `UNKNOWN_SCORE`).
    pub category_scores: BTreeMap<String, u32>,
    /// Mean of the category scores, rounded to the nearest integer
    /// (half rounds up).
    pub average_score: f64,
    /// Name of the level the average score falls into.
    pub overall_level: &'static str,
}

/// Fold per-pollutant severity labels into a single day assessment.
///
/// Each label is resolved case-insensitively against the level table; a
/// recognized label scores its level's rank, an unrecognized one scores
/// `UNKNOWN_SCORE`. The overall level is the level of the rounded mean.
/// Pure: identical input always yields an identical assessment.
pub fn assess_categories(
    categories: &BTreeMap<String, String>,
) -> Result<DayAssessment, AssessError> {
    if categories.is_empty() {
        return Err(AssessError::EmptyCategories);
    }

    let category_scores: BTreeMap<String, u32> = categories
        .iter()
        .map(|(pollutant, label)| {
            let score = level_by_name(label).map_or(UNKNOWN_SCORE, |level| level.rank);
            (pollutant.clone(), score)
        })
        .collect();

    let sum: u32 = category_scores.values().sum();
    let average_score = (sum as f64 / category_scores.len() as f64).round();
    let overall_level = level_by_score(average_score).name;

    Ok(DayAssessment {
        category_scores,
        average_score,
        overall_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mixed_categories_round_half_up() {
        let input = categories(&[("pm25", "Good"), ("no2", "Hazardous")]);
        let assessment = assess_categories(&input).unwrap();
        assert_eq!(assessment.category_scores["pm25"], 1);
        assert_eq!(assessment.category_scores["no2"], 6);
        // mean 3.5 rounds up to 4
        assert_eq!(assessment.average_score, 4.0);
        assert_eq!(assessment.overall_level, "Moderate");
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let input = categories(&[("pm25", "good"), ("o3", "SEVERE")]);
        let assessment = assess_categories(&input).unwrap();
        assert_eq!(assessment.category_scores["pm25"], 1);
        assert_eq!(assessment.category_scores["o3"], 5);
        assert_eq!(assessment.average_score, 3.0);
        assert_eq!(assessment.overall_level, "Poor");
    }

    #[test]
    fn test_unknown_label_scores_zero_not_one() {
        let input = categories(&[("pm25", "Xyz-unrecognized")]);
        let assessment = assess_categories(&input).unwrap();
        assert_eq!(assessment.category_scores["pm25"], UNKNOWN_SCORE);
        assert_eq!(assessment.average_score, 0.0);
        // a zero average clamps below the scale to Good
        assert_eq!(assessment.overall_level, "Good");
    }

    #[test]
    fn test_unknown_label_mixed_with_known() {
        let input = categories(&[("pm25", "bogus"), ("no2", "Moderate")]);
        let assessment = assess_categories(&input).unwrap();
        // (0 + 4) / 2 = 2
        assert_eq!(assessment.average_score, 2.0);
        assert_eq!(assessment.overall_level, "Satisfactory");
    }

    #[test]
    fn test_empty_categories_is_an_error() {
        let input = BTreeMap::new();
        assert_eq!(assess_categories(&input), Err(AssessError::EmptyCategories));
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let input = categories(&[("pm25", "Poor"), ("no2", "Good"), ("so2", "Severe")]);
        let first = assess_categories(&input).unwrap();
        let second = assess_categories(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_category() {
        let input = categories(&[("pm10", "Satisfactory")]);
        let assessment = assess_categories(&input).unwrap();
        assert_eq!(assessment.average_score, 2.0);
        assert_eq!(assessment.overall_level, "Satisfactory");
    }
}
