//! Dataset model and render planning for the plastic pollution dashboard.
//!
//! This crate holds everything that does not need a browser:
//! - parsing and shape-checking the country dataset
//! - filtering by selected country names
//! - building Plotly figures (traces + layout) for the four charts
//! - building the metadata panel text
//! - the selection controller that ties them together
//!
//! The WASM side (`ppd-chart-ui`) only fetches bytes, draws figures and
//! renders RSX. Keeping it thin means the whole render path is testable
//! with plain `cargo test`.
//!
//! # Usage
//!
//! ```rust
//! use ppd_core::{filter_countries, Dataset};
//!
//! let dataset = Dataset::from_json_str(
//!     r#"[{"country": "A", "recycling_rate": 10}, {"country": "B", "recycling_rate": 90}]"#,
//! )
//! .unwrap();
//!
//! let selected = filter_countries(&dataset, &["B"]);
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].recycling_rate(), Some(90.0));
//! ```

pub mod config;
pub mod controller;
mod dataset;
pub mod error;
pub mod figures;
mod filter;
pub mod format;
pub mod metadata;
mod record;

pub use config::DashboardConfig;
pub use controller::{ControllerState, DashboardView, RenderOutcome, SelectionController};
pub use dataset::Dataset;
pub use error::{DashboardError, LoadError, MalformedDataError};
pub use figures::{ChartKind, Figure};
pub use filter::filter_countries;
pub use metadata::MetadataPanel;
pub use record::{CoastalRisk, CountryRecord};
