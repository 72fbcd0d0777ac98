//! Pure view-model for the calendar heatmap.
//!
//! Computes the display parameters (domain granularity, range span) for a
//! date range, and serializes day data and scale configuration for the
//! JS bridge. Nothing here touches the DOM.

use aqc_api::PollutionDay;
use aqc_levels::{color_range, thresholds, UNKNOWN_SCORE};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Display parameters for the cal-heatmap widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    /// "month" or "year"
    pub domain_type: &'static str,
    /// Always "day"; one cell per day.
    pub sub_domain_type: &'static str,
    /// Number of domains painted at once.
    pub range: u32,
}

/// Calendar-month difference between two dates (day of month ignored).
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Pick the calendar view for a date range.
///
/// Same month shows a single month, up to four months apart shows one
/// month domain per month, anything wider collapses to a year view.
pub fn view_for_range(start: NaiveDate, end: NaiveDate) -> CalendarView {
    let months_diff = months_between(start, end);
    if start.year() == end.year() && start.month() == end.month() {
        CalendarView {
            domain_type: "month",
            sub_domain_type: "day",
            range: 1,
        }
    } else if months_diff <= 4 {
        CalendarView {
            domain_type: "month",
            sub_domain_type: "day",
            range: months_diff.max(0) as u32 + 1,
        }
    } else {
        CalendarView {
            domain_type: "year",
            sub_domain_type: "day",
            range: 1,
        }
    }
}

/// Whether prev/next navigation buttons are worth showing.
pub fn show_navigation(start: NaiveDate, end: NaiveDate) -> bool {
    let view = view_for_range(start, end);
    view.range > 1 || months_between(start, end) > 2
}

/// Default selection: the week ending today (inclusive).
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Days::new(7), today)
}

/// One `{date, value}` pair handed to the heatmap, with optional
/// precomputed tooltip text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// Scale and layout configuration handed to the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    /// `YYYY-MM-DD` start of the painted range.
    pub start: String,
    pub range: u32,
    pub domain_type: &'static str,
    pub sub_domain_type: &'static str,
    /// No-data gray followed by the six level colors.
    pub colors: Vec<&'static str>,
    pub thresholds: Vec<u32>,
}

/// Build the widget configuration for a date range.
pub fn calendar_config(start: NaiveDate, end: NaiveDate) -> CalendarConfig {
    let view = view_for_range(start, end);
    CalendarConfig {
        start: start.format("%Y-%m-%d").to_string(),
        range: view.range,
        domain_type: view.domain_type,
        sub_domain_type: view.sub_domain_type,
        colors: color_range().to_vec(),
        thresholds: thresholds().to_vec(),
    }
}

/// Tooltip body for one assessed day: date, city, then one line per
/// pollutant with its numeric score.
pub fn tooltip_text(day: &PollutionDay) -> String {
    let mut text = format!("{} | {}", day.date_string, day.city_name);
    for (pollutant, score) in &day.assessment.category_scores {
        text.push_str(&format!("\n{}: {}", pollutant.to_uppercase(), score));
    }
    text
}

/// Map assessed days onto heatmap points.
pub fn calendar_points(days: &[PollutionDay]) -> Vec<CalendarPoint> {
    days.iter()
        .map(|day| CalendarPoint {
            date: day.iso_date(),
            value: day.calendar_value(),
            tooltip: Some(tooltip_text(day)),
        })
        .collect()
}

/// Placeholder points shown before any data has loaded: six consecutive
/// days ramping through the scale.
pub fn sample_points(start: NaiveDate) -> Vec<CalendarPoint> {
    [1.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .enumerate()
        .map(|(offset, value)| CalendarPoint {
            date: (start + Days::new(offset as u64)).format("%Y-%m-%d").to_string(),
            value: *value,
            tooltip: None,
        })
        .collect()
}

/// Display label for a single pollutant score in the modal.
pub fn score_label(score: u32) -> &'static str {
    if score == UNKNOWN_SCORE {
        "Unscored"
    } else {
        aqc_levels::level_by_score(score as f64).name
    }
}
