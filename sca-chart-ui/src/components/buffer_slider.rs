//! Slider for the point analysis buffer radius.

use crate::state::{AppState, BUFFER_STEP_M, MAX_BUFFER_M, MIN_BUFFER_M};
use dioxus::prelude::*;

/// Buffer radius slider, 500-5000 m in 500 m steps.
#[component]
pub fn BufferSlider() -> Element {
    let mut state = use_context::<AppState>();
    let buffer = (state.buffer_m)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u32>() {
            state.buffer_m.set(value.clamp(MIN_BUFFER_M, MAX_BUFFER_M));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Analysis Buffer: "
            }
            input {
                r#type: "range",
                min: "{MIN_BUFFER_M}",
                max: "{MAX_BUFFER_M}",
                step: "{BUFFER_STEP_M}",
                value: "{buffer}",
                onchange: on_change,
            }
            span { "{buffer} m" }
        }
    }
}
