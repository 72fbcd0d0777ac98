//! Day-detail modal showing the full assessment for a clicked day.

use aqc_levels::level_by_name;
use dioxus::prelude::*;

use crate::calendar::score_label;
use crate::state::AppState;

/// Modal with the selected day's overall level and per-pollutant scores.
/// Renders nothing while no day is selected.
#[component]
pub fn PollutionModal() -> Element {
    let mut state = use_context::<AppState>();
    let Some(day) = (state.modal_day)() else {
        return rsx! {};
    };

    let overall_color = level_by_name(day.assessment.overall_level)
        .map(|level| level.color)
        .unwrap_or("#e5e7eb");
    let close = move |_| state.modal_day.set(None);

    rsx! {
        div {
            // Backdrop; clicking it closes the modal
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; justify-content: center; align-items: center; z-index: 100;",
            onclick: close,
            div {
                style: "background: white; border-radius: 8px; padding: 20px 24px; min-width: 320px; max-width: 90%;",
                onclick: move |evt| evt.stop_propagation(),

                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{day.formatted_date()}"
                }
                p {
                    style: "margin: 0 0 12px 0; color: #666;",
                    "{day.city_name}"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 12px;",
                    span {
                        style: "display: inline-block; width: 14px; height: 14px; border-radius: 3px; background: {overall_color};",
                    }
                    strong { "{day.assessment.overall_level}" }
                    span {
                        style: "color: #666;",
                        "(average score {day.assessment.average_score})"
                    }
                }
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    for (pollutant, score) in day.assessment.category_scores.iter() {
                        tr {
                            td {
                                style: "padding: 4px 8px 4px 0; font-weight: bold;",
                                "{pollutant.to_uppercase()}"
                            }
                            td {
                                style: "padding: 4px 8px;",
                                "{score}"
                            }
                            td {
                                style: "padding: 4px 0; color: #666;",
                                "{score_label(*score)}"
                            }
                        }
                    }
                }
                button {
                    style: "margin-top: 16px;",
                    onclick: move |_| state.modal_day.set(None),
                    "Close"
                }
            }
        }
    }
}
