//! Dropdown selector for choosing a watershed.

use crate::state::AppState;
use dioxus::prelude::*;

/// Watershed dropdown selector.
/// Reads available watersheds from AppState and updates selected_watershed on change.
#[component]
pub fn WatershedSelector() -> Element {
    let mut state = use_context::<AppState>();
    let watersheds = state.watersheds.read().clone();
    let selected = (state.selected_watershed)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_watershed.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "watershed-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Watershed: "
            }
            select {
                id: "watershed-select",
                onchange: on_change,
                for name in watersheds.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
