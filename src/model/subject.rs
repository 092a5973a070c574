use std::fmt;

/// Scalar stored in a subject's metadata record.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Number(v) => f.write_str(&format_number(*v)),
            MetaValue::Text(s) => f.write_str(s),
            MetaValue::Bool(b) => write!(f, "{b}"),
            MetaValue::Null => f.write_str("null"),
        }
    }
}

/// Integral values print without a fractional part (`8`, not `8.0`).
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Demographic record for one subject. `fields` keeps every entry in document
/// order, `wfreq` included; `wfreq` is also lifted out for the gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub wfreq: Option<f64>,
    pub fields: Vec<(String, MetaValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplesRecord {
    pub otu_ids: Vec<u32>,
    pub sample_values: Vec<f64>,
    pub otu_labels: Vec<String>,
}

impl SamplesRecord {
    pub fn len(&self) -> usize {
        self.otu_ids.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub metadata: MetadataRecord,
    pub samples: SamplesRecord,
}
