//! Calendar container component with optional navigation buttons.

use dioxus::prelude::*;

use crate::js_bridge;

/// Props for CalendarContainer
#[derive(Props, Clone, PartialEq)]
pub struct CalendarContainerProps {
    /// The DOM id for the calendar container (cal-heatmap renders into this)
    pub id: String,
    /// Whether prev/next navigation buttons are shown
    #[props(default = false)]
    pub show_navigation: bool,
    /// Optional minimum height in pixels
    #[props(default = 220)]
    pub min_height: u32,
}

/// A container div for the calendar heatmap with prev/next navigation.
#[component]
pub fn CalendarContainer(props: CalendarContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.show_navigation {
                div {
                    style: "display: flex; gap: 8px; margin-bottom: 8px;",
                    button {
                        onclick: move |_| js_bridge::calendar_previous(),
                        "← Previous"
                    }
                    button {
                        onclick: move |_| js_bridge::calendar_next(),
                        "Next →"
                    }
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
