use rand::Rng;
use serde::Serialize;

use crate::model::{Subject, project};
use crate::report::{AxisTitle, ChartCommand, Layout, Trace};

pub const BUBBLE_TARGET: &str = "bubble";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleTrace {
    pub x: Vec<u32>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub marker: BubbleMarker,
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleMarker {
    pub color: Vec<String>,
    pub opacity: Vec<f64>,
    pub size: Vec<f64>,
    pub sizemode: &'static str,
    pub sizeref: f64,
}

/// Every OTU as a bubble sized by abundance. Colour and opacity are drawn
/// independently per point from `rng`.
pub fn render_bubble<R: Rng>(subject: &Subject, sizeref: f64, rng: &mut R) -> ChartCommand {
    tracing::debug!(subject = %subject.name, panel = BUBBLE_TARGET, "rendering panel");
    let samples = project(subject);

    let mut color = Vec::with_capacity(samples.len());
    let mut opacity = Vec::with_capacity(samples.len());
    for _ in &samples {
        color.push(random_rgb(rng));
        opacity.push(rng.gen_range(0.0..1.0));
    }

    let values: Vec<f64> = samples.iter().map(|s| s.sample_value).collect();
    let trace = BubbleTrace {
        x: samples.iter().map(|s| s.otu_id).collect(),
        y: values.clone(),
        mode: "markers",
        marker: BubbleMarker {
            color,
            opacity,
            size: values,
            sizemode: "area",
            sizeref,
        },
        text: samples.into_iter().map(|s| s.otu_label).collect(),
    };

    ChartCommand {
        target: BUBBLE_TARGET,
        data: vec![Trace::Bubble(trace)],
        layout: Layout {
            showlegend: Some(false),
            xaxis: Some(AxisTitle { title: "OTU ID" }),
            ..Layout::default()
        },
        config: None,
    }
}

fn random_rgb<R: Rng>(rng: &mut R) -> String {
    let r: u8 = rng.gen_range(0..=255);
    let g: u8 = rng.gen_range(0..=255);
    let b: u8 = rng.gen_range(0..=255);
    format!("rgb({r}, {g}, {b})")
}
