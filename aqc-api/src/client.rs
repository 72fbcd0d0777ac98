//! Client for the pollution history endpoint.

use chrono::NaiveDate;

use crate::history::format_api_date;
#[cfg(feature = "web")]
use crate::{error::FetchError, history::PollutionDay};

/// Stateless client for the pollution backend.
///
/// Holds only the base URL; construct one wherever it is needed and pass
/// it by reference. There is no retry and no timeout: each call is a
/// single fetch whose failure surfaces immediately as a `FetchError`.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutionApi {
    base_url: String,
}

impl Default for PollutionApi {
    fn default() -> Self {
        Self::new("/api")
    }
}

impl PollutionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// GET URL for a city's history over an inclusive date range.
    pub fn history_url(&self, city: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/pollution?city={}&startDate={}&endDate={}",
            self.base_url,
            city,
            format_api_date(start),
            format_api_date(end)
        )
    }

    /// Fetch and assess a city's pollution history.
    ///
    /// Steps run strictly in order: request, status check, body read,
    /// parse, transform. A non-success status yields the server's own
    /// `message` when its body carries one, else a generic status line.
    #[cfg(feature = "web")]
    pub async fn fetch_history(
        &self,
        city: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PollutionDay>, FetchError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        use crate::history::{parse_history, status_error_message, transform_history};

        let url = self.history_url(city, start, end);
        log::info!("Fetching pollution history: {}", url);

        let window =
            web_sys::window().ok_or_else(|| FetchError::new("no window object available"))?;
        let response_value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|e| FetchError::new(format!("network request failed: {:?}", e)))?;
        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(|_| FetchError::new("fetch returned a non-Response value"))?;

        let body_promise = response
            .text()
            .map_err(|_| FetchError::new("failed to read response body"))?;
        let body = JsFuture::from(body_promise)
            .await
            .map_err(|e| FetchError::new(format!("failed to read response body: {:?}", e)))?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            let message = status_error_message(response.status(), &response.status_text(), &body);
            log::error!("History fetch failed for {}: {}", city, message);
            return Err(FetchError::new(message));
        }

        let parsed = parse_history(&body)?;
        let days = transform_history(parsed);
        log::info!("Fetched {} assessed days for {}", days.len(), city);
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url() {
        let api = PollutionApi::new("/api");
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(
            api.history_url("Tokyo", start, end),
            "/api/pollution?city=Tokyo&startDate=01-06-2024&endDate=30-06-2024"
        );
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(PollutionApi::default(), PollutionApi::new("/api"));
    }
}
