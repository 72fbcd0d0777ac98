//! Shared Dioxus components and cal-heatmap bridge for AQC chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the cal-heatmap widget via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `calendar`: pure view-model for the calendar display parameters
//! - `components`: Reusable RSX components (selectors, modal, containers)

pub mod calendar;
pub mod components;
pub mod js_bridge;
pub mod state;
