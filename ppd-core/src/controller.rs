//! Selection controller: turns "selection changed" messages into renders.
//!
//! The controller owns the loaded [`Dataset`] and talks to the page only
//! through [`DashboardView`]. In the browser the view draws with Plotly and
//! updates Dioxus signals; in tests it records calls.
//!
//! Rendering is a two-state machine, `Idle -> Rendering -> Idle`. Every
//! figure and the metadata panel are built before the first draw, so a
//! render either starts drawing with a complete set or does not draw at all.

use crate::dataset::Dataset;
use crate::figures::{ChartKind, Figure};
use crate::filter::filter_countries;
use crate::metadata::{build_metadata_panel, MetadataPanel};

/// Presentation side of the dashboard.
pub trait DashboardView {
    /// Reflect the resolved selection in the selection control.
    fn show_selection(&mut self, selection: &[String]);
    /// Replace the content of the figure's mount point.
    fn draw_chart(&mut self, figure: &Figure);
    /// Replace the metadata panel.
    fn show_metadata(&mut self, panel: &MetadataPanel);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Rendering,
}

/// Result of handling one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All charts and the panel were redrawn for this many records.
    Rendered { countries: usize },
    /// Nothing matched. The view was not touched and keeps its old content.
    EmptySelection,
}

pub struct SelectionController {
    dataset: Dataset,
    state: ControllerState,
}

impl SelectionController {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            state: ControllerState::Idle,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Selection shown on load and whenever the user clears the control:
    /// the first option, which is the first record's country.
    pub fn default_selection(&self) -> Vec<String> {
        vec![self.dataset.first().country().to_string()]
    }

    /// Substitute the default selection for an empty one.
    pub fn resolve_selection(&self, chosen: Vec<String>) -> Vec<String> {
        if chosen.is_empty() {
            self.default_selection()
        } else {
            chosen
        }
    }

    /// Handle a selection-change message carrying the control's chosen values.
    ///
    /// An empty set is replaced by the default selection, which is echoed
    /// back to the control before rendering.
    pub fn on_selection_changed<V: DashboardView + ?Sized>(
        &mut self,
        chosen: Vec<String>,
        view: &mut V,
    ) -> RenderOutcome {
        let selection = self.resolve_selection(chosen);
        view.show_selection(&selection);
        self.render(&selection, view)
    }

    /// Filter, then draw bar, bubble, line and coastal charts and the
    /// metadata panel, in that order.
    pub fn render<S, V>(&mut self, selection: &[S], view: &mut V) -> RenderOutcome
    where
        S: AsRef<str>,
        V: DashboardView + ?Sized,
    {
        self.state = ControllerState::Rendering;

        let records = filter_countries(&self.dataset, selection);
        if records.is_empty() {
            log::warn!("[PPD] controller: No data found for selected countries.");
            self.state = ControllerState::Idle;
            return RenderOutcome::EmptySelection;
        }

        let figures: Vec<Figure> = ChartKind::ALL
            .iter()
            .map(|kind| kind.build(&records))
            .collect();
        let panel = build_metadata_panel(&records);

        for figure in &figures {
            view.draw_chart(figure);
        }
        view.show_metadata(&panel);

        log::info!("[PPD] controller: Rendered {} countries", records.len());
        self.state = ControllerState::Idle;
        RenderOutcome::Rendered {
            countries: records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Call {
        Selection(Vec<String>),
        Chart(ChartKind),
        Metadata(MetadataPanel),
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<Call>,
        figures: Vec<Figure>,
    }

    impl DashboardView for RecordingView {
        fn show_selection(&mut self, selection: &[String]) {
            self.calls.push(Call::Selection(selection.to_vec()));
        }

        fn draw_chart(&mut self, figure: &Figure) {
            self.calls.push(Call::Chart(figure.kind));
            self.figures.push(figure.clone());
        }

        fn show_metadata(&mut self, panel: &MetadataPanel) {
            self.calls.push(Call::Metadata(panel.clone()));
        }
    }

    fn controller() -> SelectionController {
        let dataset = Dataset::from_json_str(
            &json!([
                {
                    "country_id": 1,
                    "country": "A",
                    "total_plastic_waste_mt": 3.5,
                    "recycling_rate": 10,
                    "per_capita_waste_kg": 12.0,
                    "coastal_waste_risk": "Low"
                },
                {
                    "country_id": 2,
                    "country": "B",
                    "total_plastic_waste_mt": 8.0,
                    "recycling_rate": 90,
                    "per_capita_waste_kg": 30.0,
                    "coastal_waste_risk": "Unknown"
                }
            ])
            .to_string(),
        )
        .unwrap();
        SelectionController::new(dataset)
    }

    #[test]
    fn test_renders_in_fixed_order() {
        let mut c = controller();
        let mut view = RecordingView::default();
        let outcome = c.on_selection_changed(vec!["A".to_string(), "B".to_string()], &mut view);
        assert_eq!(outcome, RenderOutcome::Rendered { countries: 2 });

        let kinds: Vec<&Call> = view.calls.iter().collect();
        assert_eq!(kinds.len(), 6);
        assert_eq!(
            *kinds[0],
            Call::Selection(vec!["A".to_string(), "B".to_string()])
        );
        assert_eq!(*kinds[1], Call::Chart(ChartKind::Bar));
        assert_eq!(*kinds[2], Call::Chart(ChartKind::Bubble));
        assert_eq!(*kinds[3], Call::Chart(ChartKind::Line));
        assert_eq!(*kinds[4], Call::Chart(ChartKind::CoastalRisk));
        assert!(matches!(kinds[5], Call::Metadata(MetadataPanel::Countries(b)) if b.len() == 2));
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn test_single_country_scenario() {
        let mut c = controller();
        let mut view = RecordingView::default();
        c.on_selection_changed(vec!["B".to_string()], &mut view);

        let bar = &view.figures[0];
        assert_eq!(bar.traces[1]["x"], json!(["B"]));
        assert_eq!(bar.traces[1]["y"], json!([90.0]));
        let line = &view.figures[2];
        assert_eq!(line.traces[0]["y"], json!([90.0]));
        // Unknown coastal risk still plotted, at zero
        let coastal = &view.figures[3];
        assert_eq!(coastal.traces[0]["y"], json!([0]));

        let Some(Call::Metadata(MetadataPanel::Countries(blocks))) = view.calls.last() else {
            panic!("metadata should be rendered last");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].heading, "B");
    }

    #[test]
    fn test_cleared_selection_falls_back_to_first_option() {
        let mut c = controller();
        let mut view = RecordingView::default();
        let outcome = c.on_selection_changed(Vec::new(), &mut view);
        assert_eq!(outcome, RenderOutcome::Rendered { countries: 1 });
        // the control is told to show the substituted country
        assert_eq!(view.calls[0], Call::Selection(vec!["A".to_string()]));
        assert_eq!(view.figures[0].traces[0]["x"], json!(["A"]));
    }

    #[test]
    fn test_resolve_never_empty() {
        let c = controller();
        assert_eq!(c.resolve_selection(Vec::new()), vec!["A".to_string()]);
        assert_eq!(
            c.resolve_selection(vec!["B".to_string()]),
            vec!["B".to_string()]
        );
        assert_eq!(c.default_selection(), vec!["A".to_string()]);
    }

    #[test]
    fn test_empty_result_leaves_view_untouched() {
        let mut c = controller();
        let mut view = RecordingView::default();
        let outcome = c.on_selection_changed(vec!["Atlantis".to_string()], &mut view);
        assert_eq!(outcome, RenderOutcome::EmptySelection);
        assert_eq!(view.calls, vec![Call::Selection(vec!["Atlantis".to_string()])]);
        assert!(view.figures.is_empty());
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn test_consecutive_messages_fully_replace() {
        let mut c = controller();
        let mut view = RecordingView::default();
        c.on_selection_changed(vec!["A".to_string()], &mut view);
        c.on_selection_changed(vec!["B".to_string()], &mut view);
        assert_eq!(view.calls.len(), 12);
        assert_eq!(view.calls[6], Call::Selection(vec!["B".to_string()]));
        assert_eq!(view.figures[4].traces[0]["x"], json!(["B"]));
    }
}
