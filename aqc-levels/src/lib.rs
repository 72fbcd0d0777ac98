//! Pollution severity scale and per-day aggregation for AQC chart apps.
//!
//! This crate provides:
//! - `level`: the static six-level severity scale with score/name lookups
//! - `assessment`: folding a day's per-pollutant labels into one assessment

pub mod assessment;
pub mod level;

pub use assessment::{assess_categories, AssessError, DayAssessment, UNKNOWN_SCORE};
pub use level::{color_range, level_by_name, level_by_score, thresholds, PollutionLevel, LEVELS};
