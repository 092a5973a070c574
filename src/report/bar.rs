use serde::Serialize;

use crate::model::{Subject, project, top_n};
use crate::report::{ChartCommand, Layout, Margin, PlotConfig, Trace};

pub const BAR_TARGET: &str = "bar";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub text: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub orientation: &'static str,
}

/// Horizontal bars for the `n` most abundant OTUs. The chart draws the first
/// category at the bottom, so the ascending order puts the largest on top.
pub fn render_bar(subject: &Subject, n: usize) -> ChartCommand {
    tracing::debug!(subject = %subject.name, panel = BAR_TARGET, top_n = n, "rendering panel");
    let top = top_n(project(subject), n);

    let trace = BarTrace {
        x: top.iter().map(|s| s.sample_value).collect(),
        y: top.iter().map(|s| format!("OTU {}", s.otu_id)).collect(),
        text: top.iter().map(|s| s.otu_label.clone()).collect(),
        kind: "bar",
        orientation: "h",
    };

    ChartCommand {
        target: BAR_TARGET,
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            margin: Some(Margin {
                l: 100,
                r: 100,
                t: 0,
                b: 25,
            }),
            ..Layout::default()
        },
        config: Some(PlotConfig {
            display_mode_bar: false,
        }),
    }
}
