//! Page header with title and a short description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    /// Page title
    pub title: String,
    /// One-line description under the title
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px; padding: 16px; background: #E3F2FD; border-radius: 4px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #555;",
                    "{props.description}"
                }
            }
        }
    }
}
