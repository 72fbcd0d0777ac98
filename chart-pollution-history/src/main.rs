//! City Air Pollution History Calendar
//!
//! Displays a calendar heatmap of historic air pollution for a selected
//! city. The user picks a city and a date range; each day's per-pollutant
//! severity labels are fetched from the backend, folded into a single
//! score, and painted as a colored cell. Clicking a day opens a modal with
//! the full per-pollutant breakdown.
//!
//! Data flow:
//! 1. `AppState` holds the selected city and date range as Signals.
//! 2. A fetch effect calls the pollution history endpoint whenever the
//!    selection changes and stores the assessed days (or the error).
//! 3. A render effect serializes the days plus the severity color scale
//!    and hands them to the cal-heatmap widget via `js_bridge`.
//! 4. Day clicks come back through `window.__aqcOnDayClick` and open the
//!    detail modal.

use aqc_api::{City, PollutionApi};
use aqc_chart_ui::components::{
    CalendarContainer, ChartHeader, CitySelector, DateRangePicker, ErrorDisplay, LoadingSpinner,
    PollutionModal,
};
use aqc_chart_ui::state::AppState;
use aqc_chart_ui::{calendar, js_bridge};
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Calendar container DOM element ID used by cal-heatmap to render into.
const CHART_ID: &str = "pollution-history-calendar";

/// HTML date input format.
const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pollution-history-root"))
        .launch(App);
}

/// Parse both HTML date inputs; None until the user has a valid range.
fn parse_range(start: &str, end: &str) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::parse_from_str(start, HTML_DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end, HTML_DATE_FORMAT).ok()?;
    if start > end {
        return None;
    }
    Some((start, end))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-time setup: evaluate the calendar glue scripts and register the
    // day-click hook that opens the modal.
    use_effect(move || {
        js_bridge::init_calendar_scripts();
        js_bridge::set_day_click_handler(move |iso_date| {
            let clicked = state
                .days
                .read()
                .iter()
                .find(|day| day.iso_date() == iso_date)
                .cloned();
            if let Some(day) = clicked {
                log::info!("Opening modal for {}", day.date_string);
                state.modal_day.set(Some(day));
            }
        });
    });

    // Fetch pollution history whenever the city or date range changes.
    use_effect(move || {
        let city_id = (state.selected_city)();
        let start_raw = (state.start_date)();
        let end_raw = (state.end_date)();

        let Some((start, end)) = parse_range(&start_raw, &end_raw) else {
            return;
        };
        let city = City::name_for_id(city_id);

        state.loading.set(true);
        state.error_msg.set(None);

        spawn(async move {
            let api = PollutionApi::default();
            match api.fetch_history(city, start, end).await {
                Ok(days) => {
                    state.days.set(days);
                }
                Err(e) => {
                    log::error!("History fetch failed: {}", e);
                    state.days.set(Vec::new());
                    state.error_msg.set(Some(e.message().to_string()));
                }
            }
            state.loading.set(false);
        });
    });

    // Re-render the calendar whenever the data or the range changes.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            js_bridge::destroy_calendar(CHART_ID);
            return;
        }
        let Some((start, end)) = parse_range(&(state.start_date)(), &(state.end_date)()) else {
            return;
        };

        let days = state.days.read();
        let points = if days.is_empty() {
            calendar::sample_points(start)
        } else {
            calendar::calendar_points(&days)
        };
        let config = calendar::calendar_config(start, end);

        let data_json = serde_json::to_string(&points).unwrap_or_default();
        let config_json = serde_json::to_string(&config).unwrap_or_default();
        log::info!(
            "Rendering calendar: {} points, {} view, range {}",
            points.len(),
            config.domain_type,
            config.range
        );
        js_bridge::render_heat_calendar(CHART_ID, &data_json, &config_json);
    });

    let show_navigation = parse_range(&(state.start_date)(), &(state.end_date)())
        .map(|(start, end)| calendar::show_navigation(start, end))
        .unwrap_or(false);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "City Air Pollution History".to_string(),
                scale_description: "Good (1) to Hazardous (6); gray cells have no data".to_string(),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                CitySelector {}
                DateRangePicker {}
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                CalendarContainer {
                    id: CHART_ID.to_string(),
                    show_navigation,
                    min_height: 260,
                }
            }

            PollutionModal {}
        }
    }
}
