//! Chart container component with a fixed mount point.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the mount point (Plotly draws into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
}

/// A card holding one Plotly mount point.
///
/// The inner div is never re-rendered by Dioxus after mount, so Plotly owns
/// its children.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; margin-bottom: 16px; border: 1px solid #e0e0e0; border-radius: 4px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
