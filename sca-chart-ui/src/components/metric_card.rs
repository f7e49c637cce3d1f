//! Single metric card showing a label and a formatted value.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
}

/// One metric card. Dashboards lay rows of these out with flex containers.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 120px; background: #f8f9fa; padding: 12px 16px; border-radius: 8px; border-left: 4px solid #2E86AB;",
            div {
                style: "font-size: 12px; color: #666; margin-bottom: 4px;",
                "{props.label}"
            }
            div {
                style: "font-size: 20px; font-weight: bold;",
                "{props.value}"
            }
        }
    }
}
