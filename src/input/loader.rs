use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::DashboardError;
use crate::input::schema::{Dataset, parse_dataset};

pub const DEFAULT_DATA_PATH: &str = "data/samples.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }

    fn is_gzip(&self) -> bool {
        match self {
            DataSource::File(path) => path.extension().is_some_and(|ext| ext == "gz"),
            DataSource::Url(url) => url.ends_with(".gz"),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetches and validates the dataset. One attempt; no retry or timeout.
pub async fn load_dataset(source: &DataSource) -> Result<Dataset, DashboardError> {
    let name = source.to_string();
    tracing::info!(source = %name, "loading dataset");

    let raw = match source {
        DataSource::File(path) => read_file(path).await?,
        DataSource::Url(url) => fetch_url(url).await?,
    };
    let bytes = if source.is_gzip() {
        gunzip(&raw).map_err(|e| DashboardError::load(&name, format!("gzip: {e}")))?
    } else {
        raw
    };

    let dataset = parse_dataset(&bytes, &name)?;
    tracing::debug!(
        source = %name,
        subjects = dataset.names.len(),
        bytes = bytes.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

async fn read_file(path: &Path) -> Result<Vec<u8>, DashboardError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| DashboardError::load(path.display().to_string(), e))
}

async fn fetch_url(url: &str) -> Result<Vec<u8>, DashboardError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| DashboardError::load(url, e))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| DashboardError::load(url, e))?;
    Ok(body.to_vec())
}

fn gunzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/loader.rs"]
mod tests;
