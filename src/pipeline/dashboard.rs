use rand::Rng;

use crate::error::DashboardError;
use crate::model::Subject;
use crate::pipeline::output::PanelSink;
use crate::pipeline::selection::RenderTarget;
use crate::report::RenderSettings;
use crate::report::bar::render_bar;
use crate::report::bubble::render_bubble;
use crate::report::gauge::render_gauge;
use crate::report::metadata::render_metadata;

/// The four linked panels over one display sink. A full render always runs
/// metadata, bar, bubble, gauge in that order.
pub struct Dashboard<S, R> {
    sink: S,
    rng: R,
    settings: RenderSettings,
    renders: usize,
}

impl<S: PanelSink, R: Rng> Dashboard<S, R> {
    pub fn new(sink: S, rng: R, settings: RenderSettings) -> Self {
        Dashboard {
            sink,
            rng,
            settings,
            renders: 0,
        }
    }

    /// Writes the selector options; done once, before the first render.
    pub fn populate_selector(&mut self, names: &[String]) -> Result<(), DashboardError> {
        self.sink.populate_selector(names)
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: PanelSink, R: Rng> RenderTarget for Dashboard<S, R> {
    fn render(&mut self, subject: &Subject) -> Result<(), DashboardError> {
        tracing::debug!(
            subject = %subject.name,
            samples = subject.samples.len(),
            "full render"
        );
        self.sink.show_text(&render_metadata(subject))?;
        self.sink
            .show_chart(&render_bar(subject, self.settings.top_n))?;
        self.sink.show_chart(&render_bubble(
            subject,
            self.settings.bubble_sizeref,
            &mut self.rng,
        ))?;
        self.sink.show_chart(&render_gauge(subject))?;
        self.sink.clear_message()?;
        self.renders += 1;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), DashboardError> {
        self.sink.show_message(message)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/dashboard.rs"]
mod tests;
