pub mod bar;
pub mod bubble;
pub mod gauge;
pub mod metadata;

use serde::Serialize;

use crate::report::bar::BarTrace;
use crate::report::bubble::BubbleTrace;
use crate::report::gauge::GaugeTrace;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_BUBBLE_SIZEREF: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub top_n: usize,
    pub bubble_sizeref: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            top_n: DEFAULT_TOP_N,
            bubble_sizeref: DEFAULT_BUBBLE_SIZEREF,
        }
    }
}

/// "Clear the panel, then append these lines."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub target: &'static str,
    pub lines: Vec<String>,
}

/// Full replacement of one chart surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartCommand {
    #[serde(skip)]
    pub target: &'static str,
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PlotConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Trace {
    Bar(BarTrace),
    Bubble(BubbleTrace),
    Gauge(GaugeTrace),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub title: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
