use serde::Serialize;

use crate::model::Subject;
use crate::report::{ChartCommand, Font, Layout, Margin, Trace};

pub const GAUGE_TARGET: &str = "gauge";
pub const GAUGE_RANGE: [f64; 2] = [0.0, 9.0];
pub const GAUGE_THRESHOLD: f64 = 3.0;

/// One unit-wide band per scrub count over `GAUGE_RANGE`, white through full
/// green. Nine bands tile `[0, 9]`; the axis separately draws `nticks: 10`
/// tick marks, one per band edge.
const GAUGE_BANDS: [&str; 9] = [
    "rgb(255, 255, 255)",
    "rgb(225, 255, 225)",
    "rgb(195, 255, 195)",
    "rgb(165, 255, 165)",
    "rgb(135, 255, 135)",
    "rgb(105, 255, 105)",
    "rgb(75, 255, 75)",
    "rgb(45, 255, 45)",
    "rgb(0, 255, 0)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub value: Option<f64>,
    pub title: Caption,
    pub subtitle: Caption,
    pub gauge: GaugeSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub axis: GaugeAxis,
    pub bar: Fill,
    pub bgcolor: &'static str,
    pub borderwidth: u32,
    pub bordercolor: &'static str,
    pub steps: Vec<GaugeStep>,
    pub threshold: Threshold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
    pub tickwidth: u32,
    pub tickcolor: &'static str,
    pub nticks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    pub line: ThresholdLine,
    pub thickness: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub color: &'static str,
    pub width: u32,
}

pub fn gauge_steps() -> Vec<GaugeStep> {
    GAUGE_BANDS
        .iter()
        .enumerate()
        .map(|(i, &color)| GaugeStep {
            range: [i as f64, (i + 1) as f64],
            color,
        })
        .collect()
}

/// Washing-frequency gauge. Only `value` depends on the subject; a missing
/// `wfreq` leaves the needle unset.
pub fn render_gauge(subject: &Subject) -> ChartCommand {
    tracing::debug!(subject = %subject.name, panel = GAUGE_TARGET, "rendering panel");
    let trace = GaugeTrace {
        kind: "indicator",
        mode: "gauge+number",
        value: subject.metadata.wfreq,
        title: Caption {
            text: "Belly Button Washing Frequency",
            font: Font {
                size: Some(24),
                ..Font::default()
            },
        },
        subtitle: Caption {
            text: "Scrubs per Week",
            font: Font {
                size: Some(18),
                ..Font::default()
            },
        },
        gauge: GaugeSpec {
            axis: GaugeAxis {
                range: GAUGE_RANGE,
                tickwidth: 1,
                tickcolor: "darkblue",
                nticks: 10,
            },
            bar: Fill { color: "purple" },
            bgcolor: "white",
            borderwidth: 4,
            bordercolor: "gray",
            steps: gauge_steps(),
            threshold: Threshold {
                line: ThresholdLine {
                    color: "red",
                    width: 4,
                },
                thickness: 0.75,
                value: GAUGE_THRESHOLD,
            },
        },
    };

    ChartCommand {
        target: GAUGE_TARGET,
        data: vec![Trace::Gauge(trace)],
        layout: Layout {
            margin: Some(Margin {
                l: 25,
                r: 25,
                t: 25,
                b: 25,
            }),
            paper_bgcolor: Some("lavender"),
            font: Some(Font {
                size: None,
                color: Some("darkblue"),
                family: Some("Arial"),
            }),
            ..Layout::default()
        },
        config: None,
    }
}
