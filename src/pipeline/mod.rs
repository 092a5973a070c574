pub mod dashboard;
pub mod output;
pub mod selection;

pub use dashboard::Dashboard;
pub use output::{DirectorySink, PanelSink};
pub use selection::{RenderTarget, SelectionController, Transition};
