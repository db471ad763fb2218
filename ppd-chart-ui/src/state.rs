//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ppd_core::{Dataset, MetadataPanel};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the fetch succeeds)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if the load failed
    pub error_msg: Signal<Option<String>>,
    /// Country names currently shown
    pub selected: Signal<Vec<String>>,
    /// Content of the metadata panel
    pub metadata: Signal<MetadataPanel>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected: Signal::new(Vec::new()),
            metadata: Signal::new(MetadataPanel::default()),
        }
    }

    /// Option values for the country selector, in dataset order.
    pub fn country_names(&self) -> Vec<String> {
        self.dataset
            .read()
            .as_ref()
            .map(Dataset::country_names)
            .unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
