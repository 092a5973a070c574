use crate::model::Subject;
use crate::report::TextCommand;

pub const METADATA_TARGET: &str = "sample-metadata";

pub fn render_metadata(subject: &Subject) -> TextCommand {
    tracing::debug!(subject = %subject.name, panel = METADATA_TARGET, "rendering panel");
    let lines = subject
        .metadata
        .fields
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    TextCommand {
        target: METADATA_TARGET,
        lines,
    }
}
