//! Dashboard header component with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Subtitle line (data source, mode description)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for dashboard pages showing title and optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px; padding: 16px; background: linear-gradient(90deg, #2E86AB 0%, #A23B72 100%); border-radius: 8px; color: white;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; opacity: 0.9;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
