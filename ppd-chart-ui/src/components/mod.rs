//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod country_selector;
mod dashboard_header;
mod error_notice;
mod loading_spinner;
mod metadata_panel;

pub use chart_container::ChartContainer;
pub use country_selector::CountrySelector;
pub use dashboard_header::DashboardHeader;
pub use error_notice::ErrorNotice;
pub use loading_spinner::LoadingSpinner;
pub use metadata_panel::MetadataPanelView;
