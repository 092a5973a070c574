use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to load dataset from {source_name}: {reason}")]
    LoadFailure { source_name: String, reason: String },
    #[error("dataset does not match the expected schema: {0}")]
    SchemaMismatch(String),
    #[error("unknown subject selected: {0}")]
    UnknownSelection(String),
    #[error("failed to read selection events: {0}")]
    SelectionInput(#[source] std::io::Error),
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DashboardError {
    pub fn load(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        DashboardError::LoadFailure {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        DashboardError::SchemaMismatch(msg.into())
    }
}
