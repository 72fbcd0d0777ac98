//! Historic pollution data access for AQC chart apps.
//!
//! This crate provides:
//! - `city`: the static registry of cities the backend reports on
//! - `history`: wire types, date handling, and response transformation
//! - `client`: the `PollutionApi` browser client (behind the `web` feature)
//! - `error`: the uniform `FetchError` surfaced to callers

pub mod city;
pub mod client;
pub mod error;
pub mod history;

pub use city::City;
pub use client::PollutionApi;
pub use error::FetchError;
pub use history::{
    format_api_date, parse_api_date, parse_history, status_error_message, transform_history,
    DayRecord, HistoryResponse, PollutionDay,
};
