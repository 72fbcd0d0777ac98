//! Dropdown selector for choosing a city.

use aqc_api::City;
use dioxus::prelude::*;

use crate::state::AppState;

/// City dropdown selector.
/// Lists the static city registry and updates selected_city on change.
#[component]
pub fn CitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_city)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(id) = evt.value().parse::<u32>() {
            state.selected_city.set(id);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-select",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-select",
                onchange: on_change,
                for city in City::all().iter() {
                    option {
                        value: "{city.id}",
                        selected: city.id == selected,
                        "{city.name} ({city.country})"
                    }
                }
            }
        }
    }
}
