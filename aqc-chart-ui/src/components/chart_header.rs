//! Chart header component with title and scale explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Explanation of the color scale (e.g., "Good (1) to Hazardous (6)")
    #[props(default = String::new())]
    pub scale_description: String,
}

/// Header for chart sections showing title and optional scale description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.scale_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Scale: {props.scale_description}"
                }
            }
        }
    }
}
