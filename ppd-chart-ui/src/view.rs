//! Browser side of `ppd_core::DashboardView`.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ppd_core::{DashboardConfig, DashboardView, Figure, MetadataPanel};

/// Draws figures with Plotly and pushes the selection and the metadata panel
/// into the signals that `CountrySelector` and `MetadataPanelView` render.
pub struct PlotlyView<'a> {
    config: &'a DashboardConfig,
    state: AppState,
}

impl<'a> PlotlyView<'a> {
    pub fn new(config: &'a DashboardConfig, state: AppState) -> Self {
        Self { config, state }
    }
}

impl DashboardView for PlotlyView<'_> {
    fn show_selection(&mut self, selection: &[String]) {
        self.state.selected.set(selection.to_vec());
    }

    fn draw_chart(&mut self, figure: &Figure) {
        js_bridge::new_plot(
            self.config.mount_id(figure.kind),
            &figure.traces_json(),
            &figure.layout_json(),
        );
    }

    fn show_metadata(&mut self, panel: &MetadataPanel) {
        self.state.metadata.set(panel.clone());
    }
}
