//! Reusable Dioxus RSX components for SCA dashboard apps.

mod advanced_stats_panel;
mod buffer_slider;
mod chart_container;
mod chart_header;
mod coordinate_input;
mod date_range_picker;
mod download_buttons;
mod error_display;
mod loading_spinner;
mod metric_card;
mod summary_cards;
mod watershed_selector;

pub use advanced_stats_panel::AdvancedStatsPanel;
pub use buffer_slider::BufferSlider;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use coordinate_input::CoordinateInput;
pub use date_range_picker::DateRangePicker;
pub use download_buttons::DownloadButtons;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use summary_cards::SummaryCards;
pub use watershed_selector::WatershedSelector;
