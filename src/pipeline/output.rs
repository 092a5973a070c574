use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DashboardError;
use crate::report::{ChartCommand, TextCommand};

pub const SELECTOR_FILE: &str = "selector.json";
pub const MESSAGE_FILE: &str = "message.txt";

/// Display collaborators: the selector, the text panel, the chart surfaces and
/// a message area.
pub trait PanelSink {
    fn populate_selector(&mut self, options: &[String]) -> Result<(), DashboardError>;
    fn show_text(&mut self, cmd: &TextCommand) -> Result<(), DashboardError>;
    fn show_chart(&mut self, cmd: &ChartCommand) -> Result<(), DashboardError>;
    fn show_message(&mut self, message: &str) -> Result<(), DashboardError>;
    fn clear_message(&mut self) -> Result<(), DashboardError>;
}

#[derive(Serialize)]
struct SelectorOptions<'a> {
    options: &'a [String],
}

/// Writes each surface to its own file under `dir`, replacing it in full.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn create(dir: &Path) -> Result<Self, DashboardError> {
        fs::create_dir_all(dir).map_err(|source| DashboardError::Output {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(DirectorySink {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), DashboardError> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value).map_err(|e| DashboardError::Output {
            path: path.clone(),
            source: e.into(),
        })?;
        write_text(&path, &json)
    }
}

impl PanelSink for DirectorySink {
    fn populate_selector(&mut self, options: &[String]) -> Result<(), DashboardError> {
        self.write_json(SELECTOR_FILE, &SelectorOptions { options })
    }

    fn show_text(&mut self, cmd: &TextCommand) -> Result<(), DashboardError> {
        let mut body = cmd.lines.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        write_text(&self.dir.join(format!("{}.txt", cmd.target)), &body)
    }

    fn show_chart(&mut self, cmd: &ChartCommand) -> Result<(), DashboardError> {
        self.write_json(&format!("{}.json", cmd.target), cmd)
    }

    fn show_message(&mut self, message: &str) -> Result<(), DashboardError> {
        write_text(&self.dir.join(MESSAGE_FILE), &format!("{message}\n"))
    }

    fn clear_message(&mut self) -> Result<(), DashboardError> {
        let path = self.dir.join(MESSAGE_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(DashboardError::Output { path, source }),
        }
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), DashboardError> {
    fs::write(path, contents).map_err(|source| DashboardError::Output {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/output.rs"]
mod tests;
