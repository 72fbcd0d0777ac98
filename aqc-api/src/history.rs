//! Wire types and transformation for the pollution history endpoint.
//!
//! The backend returns one record per day with a `DD-MM-YYYY` date and a
//! map of pollutant name to severity label. Each record is folded through
//! `aqc_levels::assess_categories` into a `PollutionDay` ready for the
//! calendar heatmap and the day-detail modal.

use std::collections::BTreeMap;

use aqc_levels::{assess_categories, DayAssessment};
use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;

use crate::error::FetchError;

/// Date format used by the API for query parameters and result dates: "DD-MM-YYYY"
pub const API_DATE_FORMAT: &str = "%d-%m-%Y";

/// Date format used by the calendar widget and HTML date inputs: "YYYY-MM-DD"
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Response body of the history endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryResponse {
    pub city: String,
    #[serde(default)]
    pub results: Vec<DayRecord>,
}

/// One day of raw category labels as the backend reports them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DayRecord {
    /// `DD-MM-YYYY`
    pub date: String,
    pub categories: BTreeMap<String, String>,
}

/// Error body the backend may send alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// One fully assessed day, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutionDay {
    pub date: NaiveDate,
    /// The raw `DD-MM-YYYY` string from the API, kept for tooltips.
    pub date_string: String,
    pub city_name: String,
    pub assessment: DayAssessment,
}

impl PollutionDay {
    /// `YYYY-MM-DD`, the key the calendar widget indexes days by.
    pub fn iso_date(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }

    /// The value plotted on the heatmap.
    pub fn calendar_value(&self) -> f64 {
        self.assessment.average_score
    }

    /// Long human-readable date for the detail modal, e.g.
    /// "Saturday, June 1, 2024".
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Parse a `DD-MM-YYYY` API date.
pub fn parse_api_date(raw: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(raw, API_DATE_FORMAT)
        .map_err(|e| FetchError::new(format!("invalid date '{}': {}", raw, e)))
}

/// Format a date as `DD-MM-YYYY` for API query parameters.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse a history endpoint response body.
pub fn parse_history(body: &str) -> Result<HistoryResponse, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::new(format!("malformed history response: {}", e)))
}

/// Message for a non-success HTTP response.
///
/// Prefers the `message` field of a JSON error body when the server sent
/// one; otherwise falls back to a generic status line.
pub fn status_error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(error_body) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = error_body.message {
            return message;
        }
    }
    format!("HTTP {}: {}", status, status_text)
}

/// Fold a parsed history response into assessed days.
///
/// Days with an unparseable date or an empty category set are dropped with
/// a warning; one malformed day must not take the whole range down with it.
pub fn transform_history(response: HistoryResponse) -> Vec<PollutionDay> {
    let city_name = response.city;
    response
        .results
        .into_iter()
        .filter_map(|record| {
            let date = match parse_api_date(&record.date) {
                Ok(date) => date,
                Err(e) => {
                    warn!("Skipping day with bad date: {}", e);
                    return None;
                }
            };
            let assessment = match assess_categories(&record.categories) {
                Ok(assessment) => assessment,
                Err(e) => {
                    warn!("Skipping {}: {}", record.date, e);
                    return None;
                }
            };
            Some(PollutionDay {
                date,
                date_string: record.date,
                city_name: city_name.clone(),
                assessment,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_BODY: &str = r#"{
        "city": "Tokyo",
        "results": [
            {"date": "01-06-2024", "categories": {"pm25": "Moderate", "no2": "Good"}},
            {"date": "02-06-2024", "categories": {"pm25": "Severe", "no2": "Poor"}}
        ]
    }"#;

    #[test]
    fn test_parse_api_date() {
        let date = parse_api_date("01-06-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(parse_api_date("2024-06-01").is_err());
        assert!(parse_api_date("32-13-2024").is_err());
    }

    #[test]
    fn test_format_api_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let formatted = format_api_date(date);
        assert_eq!(formatted, "01-06-2024");
        assert_eq!(parse_api_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_history_example_payload() {
        let response = parse_history(EXAMPLE_BODY).unwrap();
        assert_eq!(response.city, "Tokyo");
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].categories["pm25"], "Moderate");
    }

    #[test]
    fn test_parse_history_rejects_malformed_body() {
        let err = parse_history("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.message().starts_with("malformed history response"));
    }

    #[test]
    fn test_parse_history_tolerates_missing_results() {
        let response = parse_history(r#"{"city": "London"}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_status_error_message_prefers_body_message() {
        let message =
            status_error_message(404, "Not Found", r#"{"message": "city not found"}"#);
        assert_eq!(message, "city not found");
    }

    #[test]
    fn test_status_error_message_generic_fallback() {
        let message = status_error_message(500, "Internal Server Error", "not json at all");
        assert_eq!(message, "HTTP 500: Internal Server Error");
        // a JSON body without a message field also falls back
        let message = status_error_message(500, "Internal Server Error", r#"{"error": 1}"#);
        assert_eq!(message, "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_transform_history_assesses_each_day() {
        let response = parse_history(EXAMPLE_BODY).unwrap();
        let days = transform_history(response);
        assert_eq!(days.len(), 2);

        let first = &days[0];
        assert_eq!(first.city_name, "Tokyo");
        assert_eq!(first.date_string, "01-06-2024");
        assert_eq!(first.iso_date(), "2024-06-01");
        // (4 + 1) / 2 = 2.5 rounds to 3
        assert_eq!(first.assessment.average_score, 3.0);
        assert_eq!(first.assessment.overall_level, "Poor");
        assert_eq!(first.calendar_value(), 3.0);

        let second = &days[1];
        // (5 + 3) / 2 = 4
        assert_eq!(second.assessment.average_score, 4.0);
        assert_eq!(second.assessment.overall_level, "Moderate");
    }

    #[test]
    fn test_transform_history_skips_bad_days() {
        let body = r#"{
            "city": "Ankara",
            "results": [
                {"date": "not-a-date", "categories": {"pm25": "Good"}},
                {"date": "03-06-2024", "categories": {}},
                {"date": "04-06-2024", "categories": {"pm25": "Good"}}
            ]
        }"#;
        let days = transform_history(parse_history(body).unwrap());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date_string, "04-06-2024");
    }

    #[test]
    fn test_formatted_date() {
        let day = PollutionDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            date_string: "01-06-2024".to_string(),
            city_name: "Tokyo".to_string(),
            assessment: aqc_levels::assess_categories(
                &[("pm25".to_string(), "Good".to_string())].into_iter().collect(),
            )
            .unwrap(),
        };
        assert_eq!(day.formatted_date(), "Saturday, June 1, 2024");
    }
}
