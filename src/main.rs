mod cli;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::BufRead;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{RunConfig, RunMode, parse_args};
use crate::error::DashboardError;
use crate::input::load_dataset;
use crate::model::SubjectIndex;
use crate::pipeline::{Dashboard, DirectorySink, PanelSink, SelectionController, Transition};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    logging::init(config.verbose);
    if let Err(err) = run(config).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(config: RunConfig) -> Result<(), DashboardError> {
    let (out_dir, requested) = match &config.mode {
        RunMode::Names => {
            let index = SubjectIndex::build(load_dataset(&config.source).await?);
            for name in index.names() {
                println!("{name}");
            }
            return Ok(());
        }
        RunMode::Render { out_dir, subject } => (out_dir, subject.as_deref()),
        RunMode::Session { out_dir } => (out_dir, None),
    };

    let mut sink = DirectorySink::create(out_dir)?;
    let dataset = match load_dataset(&config.source).await {
        Ok(dataset) => dataset,
        Err(err) => {
            sink.show_message(&err.to_string())?;
            return Err(err);
        }
    };
    let index = SubjectIndex::build(dataset);
    tracing::info!(subjects = index.len(), "subject index built");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut dashboard = Dashboard::new(sink, rng, config.settings);
    dashboard.populate_selector(index.names())?;

    let mut controller = SelectionController::new(&index);
    let default_name = index
        .first_name()
        .ok_or_else(|| DashboardError::schema("dataset contains no subjects"))?;
    controller.initialize(requested.unwrap_or(default_name), &mut dashboard)?;
    if let RunMode::Session { .. } = config.mode {
        run_session(&mut controller, &mut dashboard, std::io::stdin().lock())?;
    }

    tracing::info!(
        out = %dashboard.sink().dir().display(),
        renders = dashboard.renders(),
        state = ?controller.state(),
        "dashboard written"
    );
    Ok(())
}

/// One selection change per non-empty line until EOF. Only the line terminator
/// is stripped, so names match exactly. Unknown names and undecodable lines are
/// shown to the user and the session carries on.
fn run_session<T, B>(
    controller: &mut SelectionController<'_>,
    target: &mut T,
    events: B,
) -> Result<(), DashboardError>
where
    T: pipeline::RenderTarget,
    B: BufRead,
{
    for (lineno, raw) in events.split(b'\n').enumerate() {
        let raw = raw.map_err(DashboardError::SelectionInput)?;
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line.strip_suffix('\r').unwrap_or(line),
            Err(err) => {
                tracing::warn!(line = lineno + 1, error = %err, "skipping undecodable selection event");
                target.notify(&format!(
                    "selection event on line {} is not valid UTF-8",
                    lineno + 1
                ))?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        match controller.on_user_select(line, target) {
            Ok(Transition::Rendered(name)) => {
                tracing::debug!(subject = %name, line = lineno + 1, "session selection applied");
            }
            Ok(Transition::Unchanged) | Err(DashboardError::UnknownSelection(_)) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
