//! Metadata panel: selected countries' attributes as text.

use crate::state::AppState;
use dioxus::prelude::*;
use ppd_core::metadata::NO_DATA_TEXT;
use ppd_core::MetadataPanel;

#[derive(Props, Clone, PartialEq)]
pub struct MetadataPanelViewProps {
    /// DOM id of the panel
    pub id: String,
}

/// Renders `AppState::metadata`. The whole panel is replaced on each
/// render, never diffed per line.
#[component]
pub fn MetadataPanelView(props: MetadataPanelViewProps) -> Element {
    let state = use_context::<AppState>();
    let panel = state.metadata.read().clone();

    rsx! {
        div {
            id: "{props.id}",
            style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 4px; font-size: 13px;",
            {match panel {
                MetadataPanel::NoData => rsx! {
                    h6 { "{NO_DATA_TEXT}" }
                },
                MetadataPanel::Countries(blocks) => rsx! {
                    for block in blocks.iter() {
                        h5 { style: "margin: 4px 0;", "{block.heading}" }
                        for line in block.lines.iter() {
                            p { style: "margin: 2px 0;", {line.text()} }
                        }
                        hr {}
                    }
                },
            }}
        }
    }
}
