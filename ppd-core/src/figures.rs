//! Plotly figure builders for the four dashboard charts.
//!
//! Each builder is a pure function from the filtered records to a
//! [`Figure`]: the traces and layout handed to `Plotly.newPlot`. Drawing a
//! figure replaces whatever was in the mount point before; nothing here
//! keeps chart state between renders.
//!
//! Missing numeric attributes are emitted as `null`, which Plotly draws as a
//! gap rather than a zero.

use crate::record::{CoastalRisk, CountryRecord};
use serde::Serialize;
use serde_json::{json, Value};

/// Which chart a figure belongs to. Each kind owns one mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Bubble,
    Line,
    CoastalRisk,
}

impl ChartKind {
    /// Render order used by the selection controller.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Bubble,
        ChartKind::Line,
        ChartKind::CoastalRisk,
    ];

    pub fn build(self, records: &[&CountryRecord]) -> Figure {
        match self {
            ChartKind::Bar => bar_chart(records),
            ChartKind::Bubble => bubble_chart(records),
            ChartKind::Line => line_chart(records),
            ChartKind::CoastalRisk => coastal_risk_chart(records),
        }
    }
}

/// Declarative description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub traces: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn traces_json(&self) -> String {
        serde_json::to_string(&self.traces).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn layout_json(&self) -> String {
        serde_json::to_string(&self.layout).unwrap_or_else(|_| "{}".to_string())
    }
}

fn names<'a>(records: &[&'a CountryRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.country()).collect()
}

fn column(
    records: &[&CountryRecord],
    f: impl Fn(&CountryRecord) -> Option<f64>,
) -> Vec<Option<f64>> {
    records.iter().map(|r| f(*r)).collect()
}

/// Grouped bars: total plastic waste and recycling rate per country.
pub fn bar_chart(records: &[&CountryRecord]) -> Figure {
    let x = names(records);
    let total_waste = column(records, CountryRecord::total_plastic_waste_mt);
    let recycle_rate = column(records, CountryRecord::recycling_rate);

    Figure {
        kind: ChartKind::Bar,
        traces: vec![
            json!({
                "x": x,
                "y": total_waste,
                "type": "bar",
                "name": "Total Plastic Waste (MT)",
                "marker": { "color": "blue" },
            }),
            json!({
                "x": x,
                "y": recycle_rate,
                "type": "bar",
                "name": "Recycling Rate (%)",
                "marker": { "color": "green" },
            }),
        ],
        layout: json!({
            "title": "Total Plastic Waste & Recycling Rate by Country",
            "xaxis": { "title": "Country" },
            "yaxis": { "title": "Value" },
            "barmode": "group",
        }),
    }
}

/// Per-capita waste against recycling rate, sized and colored by total waste.
pub fn bubble_chart(records: &[&CountryRecord]) -> Figure {
    let per_capita = column(records, CountryRecord::per_capita_waste_kg);
    let recycle_rate = column(records, CountryRecord::recycling_rate);
    let total_waste = column(records, CountryRecord::total_plastic_waste_mt);
    let sizes: Vec<Option<f64>> = total_waste.iter().map(|w| w.map(|w| w * 2.0)).collect();

    Figure {
        kind: ChartKind::Bubble,
        traces: vec![json!({
            "x": per_capita,
            "y": recycle_rate,
            "mode": "markers",
            "marker": {
                "size": sizes,
                "color": total_waste,
                "colorscale": "Viridis",
                "opacity": 0.7,
            },
            "text": names(records),
        })],
        layout: json!({
            "title": "Per Capita Waste vs Recycling Rate",
            "xaxis": { "title": "Per Capita Waste (kg)" },
            "yaxis": { "title": "Recycling Rate (%)" },
        }),
    }
}

/// Recycling rate per country as a connected line.
pub fn line_chart(records: &[&CountryRecord]) -> Figure {
    Figure {
        kind: ChartKind::Line,
        traces: vec![json!({
            "x": names(records),
            "y": column(records, CountryRecord::recycling_rate),
            "type": "scatter",
            "mode": "lines+markers",
            "line": { "color": "blue" },
        })],
        layout: json!({
            "title": "Recycling Rate by Country",
            "xaxis": { "title": "Country" },
            "yaxis": { "title": "Recycling Rate (%)" },
        }),
    }
}

/// Coastal waste risk per country on an ordinal axis.
///
/// Unrecognized categories are plotted at 0 rather than dropped.
pub fn coastal_risk_chart(records: &[&CountryRecord]) -> Figure {
    let risk_levels: Vec<u8> = records.iter().map(|r| r.coastal_risk().ordinal()).collect();
    let labels: Vec<String> = records
        .iter()
        .map(|r| {
            let raw = r.coastal_waste_risk();
            format!("{}: {}", r.country(), raw.as_deref().unwrap_or("n/a"))
        })
        .collect();

    Figure {
        kind: ChartKind::CoastalRisk,
        traces: vec![json!({
            "x": names(records),
            "y": risk_levels,
            "type": "bar",
            "marker": {
                "color": risk_levels,
                "colorscale": "YlOrRd",
                "showscale": true,
            },
            "text": labels,
        })],
        layout: json!({
            "title": "Country vs Coastal Waste Risk",
            "xaxis": { "title": "Country", "tickangle": -45 },
            "yaxis": {
                "title": "Coastal Waste Risk Level",
                "tickvals": CoastalRisk::TICK_VALUES,
                "ticktext": CoastalRisk::TICK_LABELS,
            },
        }),
    }
}
