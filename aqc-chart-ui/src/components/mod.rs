//! Reusable Dioxus RSX components for AQC chart apps.

mod calendar_container;
mod chart_header;
mod city_selector;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod pollution_modal;

pub use calendar_container::CalendarContainer;
pub use chart_header::ChartHeader;
pub use city_selector::CitySelector;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use pollution_modal::PollutionModal;
