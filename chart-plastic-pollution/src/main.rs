//! Global Plastic Pollution Dashboard
//!
//! Per-country plastic pollution statistics as four Plotly charts (bar,
//! bubble, line, coastal risk) and a metadata panel, driven by a country
//! multi-select.
//!
//! Data flow:
//! 1. On mount: inject Plotly if the page does not have it, then fetch
//!    `data/plastic_pollution.json` (served from `public/`).
//! 2. A failed fetch or a payload that is not a non-empty array replaces the
//!    whole page with an error notice.
//! 3. On success the dataset is published to `AppState` and handed to the
//!    selection coroutine, which renders the first country.
//! 4. Every change of the multi-select is sent to the same coroutine as a
//!    message, so renders run strictly one after another.

use dioxus::prelude::*;
use futures_util::StreamExt;
use ppd_chart_ui::components::{
    ChartContainer, CountrySelector, DashboardHeader, ErrorNotice, LoadingSpinner,
    MetadataPanelView,
};
use ppd_chart_ui::state::AppState;
use ppd_chart_ui::view::PlotlyView;
use ppd_chart_ui::{fetch, js_bridge, LOAD_ERROR_NOTICE};
use ppd_core::{ChartKind, DashboardConfig, Dataset, SelectionController};

/// Messages consumed by the selection coroutine, in order.
enum DashboardMessage {
    /// The dataset finished loading; render the default selection.
    Loaded(Dataset),
    /// The user changed the multi-select. Carries the chosen values.
    SelectionChanged(Vec<String>),
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let config = DashboardConfig::from_env();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(config.root_name))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(DashboardConfig::from_env);
    let state = use_context_provider(AppState::new);

    // ─── Selection controller: single consumer of selection messages ───
    let coroutine_config = config.clone();
    let messages = use_coroutine(move |mut rx: UnboundedReceiver<DashboardMessage>| {
        let config = coroutine_config.clone();
        async move {
            let mut controller: Option<SelectionController> = None;

            while let Some(message) = rx.next().await {
                // An empty choice renders the default selection
                let (active, chosen) = match message {
                    DashboardMessage::Loaded(dataset) => {
                        (controller.insert(SelectionController::new(dataset)), Vec::new())
                    }
                    DashboardMessage::SelectionChanged(chosen) => match controller.as_mut() {
                        Some(active) => (active, chosen),
                        None => {
                            log::warn!("[PPD] app: selection changed before data loaded");
                            continue;
                        }
                    },
                };

                let mut view = PlotlyView::new(&config, state);
                let outcome = active.on_selection_changed(chosen, &mut view);
                log::debug!("[PPD] app: {:?}", outcome);
            }
        }
    });

    // ─── Effect: fetch the dataset once on mount ───
    let load_config = config.clone();
    use_effect(move || {
        let url = load_config.data_url.clone();
        let mut state = state;
        js_bridge::init_plotly(&load_config.plotly_src);

        spawn(async move {
            match fetch::load_dataset(&url).await {
                Ok(dataset) => {
                    log::info!("[PPD] app: Loaded {} records from {}", dataset.len(), url);
                    state.dataset.set(Some(dataset.clone()));
                    state.loading.set(false);
                    messages.send(DashboardMessage::Loaded(dataset));
                }
                Err(e) => {
                    log::error!("[PPD] app: Error loading the data: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    // ─── Render ───
    // A load failure replaces the whole page; no mount point is rendered.
    if state.error_msg.read().is_some() {
        return rsx! {
            ErrorNotice { message: LOAD_ERROR_NOTICE.to_string() }
        };
    }

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardHeader {
                title: "Global Plastic Pollution Dashboard".to_string(),
                description: "Select one or more countries to compare plastic waste, recycling and coastal risk.".to_string(),
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",

                    div {
                        style: "flex: 0 0 280px;",
                        CountrySelector {
                            id: config.selector_id.clone(),
                            on_change: move |chosen: Vec<String>| {
                                messages.send(DashboardMessage::SelectionChanged(chosen));
                            },
                        }
                        MetadataPanelView { id: config.metadata_mount.clone() }
                    }

                    div {
                        style: "flex: 1 1 auto; min-width: 0;",
                        for kind in ChartKind::ALL {
                            ChartContainer {
                                key: "{kind:?}",
                                id: config.mount_id(kind).to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}
