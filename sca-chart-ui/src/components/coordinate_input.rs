//! Numeric latitude/longitude inputs for point analysis.

use crate::state::AppState;
use dioxus::prelude::*;

/// Latitude and longitude number inputs.
/// Values are clamped to valid coordinate ranges on change.
#[component]
pub fn CoordinateInput() -> Element {
    let mut state = use_context::<AppState>();
    let lat = (state.lat)();
    let lon = (state.lon)();

    let on_lat_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.lat.set(value.clamp(-90.0, 90.0));
        }
    };

    let on_lon_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.lon.set(value.clamp(-180.0, 180.0));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Latitude: "
                input {
                    r#type: "number",
                    min: "-90",
                    max: "90",
                    step: "0.0001",
                    value: "{lat:.4}",
                    style: "width: 110px;",
                    onchange: on_lat_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "Longitude: "
                input {
                    r#type: "number",
                    min: "-180",
                    max: "180",
                    step: "0.0001",
                    value: "{lon:.4}",
                    style: "width: 110px;",
                    onchange: on_lon_change,
                }
            }
        }
    }
}
