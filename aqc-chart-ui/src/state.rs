//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use aqc_api::PollutionDay;
use chrono::Utc;
use dioxus::prelude::*;

use crate::calendar::default_date_range;

/// Shared application state for the AQC chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently selected city id (see `aqc_api::City`)
    pub selected_city: Signal<u32>,
    /// Start date for the history range (YYYY-MM-DD, HTML date input format)
    pub start_date: Signal<String>,
    /// End date for the history range (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if the last fetch failed
    pub error_msg: Signal<Option<String>>,
    /// Assessed days for the current selection
    pub days: Signal<Vec<PollutionDay>>,
    /// Day shown in the detail modal (None = modal closed)
    pub modal_day: Signal<Option<PollutionDay>>,
}

impl AppState {
    /// Create a new AppState defaulting to Tokyo over the past week.
    pub fn new() -> Self {
        let (start, end) = default_date_range(Utc::now().date_naive());
        Self {
            selected_city: Signal::new(1),
            start_date: Signal::new(start.format("%Y-%m-%d").to_string()),
            end_date: Signal::new(end.format("%Y-%m-%d").to_string()),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            days: Signal::new(Vec::new()),
            modal_day: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
