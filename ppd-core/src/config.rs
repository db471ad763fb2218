//! Dashboard configuration: where the data lives and which DOM ids to use.
//!
//! Defaults match the DOM ids rendered by the dashboard app. The data and
//! Plotly URLs can be overridden at build time through `PPD_DATA_URL` and
//! `PPD_PLOTLY_SRC`.

use crate::figures::ChartKind;

pub const DEFAULT_DATA_URL: &str = "data/plastic_pollution.json";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Runtime configuration shared through Dioxus context.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// JSON dataset location, relative to the page.
    pub data_url: String,
    /// Script loaded when `window.Plotly` is not already present.
    pub plotly_src: String,
    /// Root element the app mounts into.
    pub root_name: String,
    /// Multi-select country control.
    pub selector_id: String,
    pub bar_mount: String,
    pub bubble_mount: String,
    pub line_mount: String,
    pub coastal_mount: String,
    pub metadata_mount: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
            root_name: "plastic-pollution-root".to_string(),
            selector_id: "selDataset".to_string(),
            bar_mount: "bar".to_string(),
            bubble_mount: "bubble".to_string(),
            line_mount: "line".to_string(),
            coastal_mount: "coastal-waste-chart".to_string(),
            metadata_mount: "sample-metadata".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults with compile-time environment overrides applied.
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("PPD_DATA_URL"), option_env!("PPD_PLOTLY_SRC"))
    }

    fn with_overrides(data_url: Option<&str>, plotly_src: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = data_url.filter(|s| !s.trim().is_empty()) {
            config.data_url = url.trim().to_string();
        }
        if let Some(src) = plotly_src.filter(|s| !s.trim().is_empty()) {
            config.plotly_src = src.trim().to_string();
        }
        config
    }

    /// DOM id of the mount point a chart draws into.
    pub fn mount_id(&self, kind: ChartKind) -> &str {
        match kind {
            ChartKind::Bar => &self.bar_mount,
            ChartKind::Bubble => &self.bubble_mount,
            ChartKind::Line => &self.line_mount,
            ChartKind::CoastalRisk => &self.coastal_mount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mount_ids() {
        let config = DashboardConfig::default();
        assert_eq!(config.mount_id(ChartKind::Bar), "bar");
        assert_eq!(config.mount_id(ChartKind::Bubble), "bubble");
        assert_eq!(config.mount_id(ChartKind::Line), "line");
        assert_eq!(config.mount_id(ChartKind::CoastalRisk), "coastal-waste-chart");
        assert_eq!(config.selector_id, "selDataset");
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::with_overrides(Some(" /static/pp.json "), Some(""));
        assert_eq!(config.data_url, "/static/pp.json");
        assert_eq!(config.plotly_src, DEFAULT_PLOTLY_SRC);
    }
}
