use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DashboardError;
use crate::model::subject::{MetaValue, MetadataRecord, SamplesRecord};

/// Validated dataset: three index-aligned sequences of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub names: Vec<String>,
    pub metadata: Vec<MetadataRecord>,
    pub samples: Vec<SamplesRecord>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    names: Vec<RawName>,
    metadata: Vec<Map<String, Value>>,
    samples: Vec<RawSamples>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawName {
    Text(String),
    Id(u64),
}

impl RawName {
    fn into_string(self) -> String {
        match self {
            RawName::Text(s) => s,
            RawName::Id(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSamples {
    otu_ids: Vec<u32>,
    sample_values: Vec<f64>,
    otu_labels: Vec<String>,
}

/// Parses and validates a dataset document. Syntax errors are load failures;
/// well-formed JSON with the wrong shape is a schema mismatch.
pub fn parse_dataset(bytes: &[u8], source_name: &str) -> Result<Dataset, DashboardError> {
    let raw: RawDataset = serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => DashboardError::schema(e.to_string()),
        _ => DashboardError::load(source_name, format!("invalid JSON: {e}")),
    })?;
    validate(raw)
}

fn validate(raw: RawDataset) -> Result<Dataset, DashboardError> {
    let n = raw.names.len();
    if n == 0 {
        return Err(DashboardError::schema("`names` is empty"));
    }
    if raw.metadata.len() != n {
        return Err(DashboardError::schema(format!(
            "`metadata` has {} entries but `names` has {}",
            raw.metadata.len(),
            n
        )));
    }
    if raw.samples.len() != n {
        return Err(DashboardError::schema(format!(
            "`samples` has {} entries but `names` has {}",
            raw.samples.len(),
            n
        )));
    }

    let names = raw.names.into_iter().map(RawName::into_string).collect();

    let mut metadata = Vec::with_capacity(n);
    for (idx, map) in raw.metadata.into_iter().enumerate() {
        metadata.push(convert_metadata(idx, map)?);
    }

    let mut samples = Vec::with_capacity(n);
    for (idx, s) in raw.samples.into_iter().enumerate() {
        if s.sample_values.len() != s.otu_ids.len() || s.otu_labels.len() != s.otu_ids.len() {
            return Err(DashboardError::schema(format!(
                "samples[{idx}] arrays differ in length (otu_ids={}, sample_values={}, otu_labels={})",
                s.otu_ids.len(),
                s.sample_values.len(),
                s.otu_labels.len()
            )));
        }
        samples.push(SamplesRecord {
            otu_ids: s.otu_ids,
            sample_values: s.sample_values,
            otu_labels: s.otu_labels,
        });
    }

    Ok(Dataset {
        names,
        metadata,
        samples,
    })
}

fn convert_metadata(idx: usize, map: Map<String, Value>) -> Result<MetadataRecord, DashboardError> {
    let wfreq = match map.get("wfreq") {
        None => {
            return Err(DashboardError::schema(format!(
                "metadata[{idx}] is missing `wfreq`"
            )));
        }
        Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            return Err(DashboardError::schema(format!(
                "metadata[{idx}].wfreq must be a number, got {other}"
            )));
        }
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => MetaValue::Null,
            Value::Bool(b) => MetaValue::Bool(b),
            Value::Number(n) => MetaValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => MetaValue::Text(s),
            Value::Array(_) | Value::Object(_) => {
                return Err(DashboardError::schema(format!(
                    "metadata[{idx}].{key} is not a scalar"
                )));
            }
        };
        fields.push((key, value));
    }

    Ok(MetadataRecord { wfreq, fields })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/schema.rs"]
mod tests;
