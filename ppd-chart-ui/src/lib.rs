//! Shared Dioxus components and Plotly.js bridge for the plastic pollution
//! dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js calls via `js_sys::eval()`
//! - `fetch`: the dataset fetch over `web-sys`
//! - `dom`: reading the multi-select control
//! - `state`: reactive AppState with Dioxus Signals
//! - `view`: the browser implementation of `ppd_core::DashboardView`
//! - `components`: reusable RSX components (selector, containers, etc.)

pub mod components;
pub mod dom;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod view;

/// Shown in place of the whole page when the dataset cannot be loaded.
pub const LOAD_ERROR_NOTICE: &str = "Error loading data. Please ensure the JSON file is in the \
     correct location and you're running this through a web server.";
