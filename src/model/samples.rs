use crate::model::subject::Subject;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleTuple {
    pub otu_id: u32,
    pub sample_value: f64,
    pub otu_label: String,
}

/// Zips a subject's parallel sample arrays into one tuple per OTU.
pub fn project(subject: &Subject) -> Vec<SampleTuple> {
    let samples = &subject.samples;
    samples
        .otu_ids
        .iter()
        .zip(samples.sample_values.iter())
        .zip(samples.otu_labels.iter())
        .map(|((&otu_id, &sample_value), label)| SampleTuple {
            otu_id,
            sample_value,
            otu_label: label.clone(),
        })
        .collect()
}

/// Highest `n` tuples by value, returned in ascending order so the largest
/// value is last. Ties keep their projected order (`sort_by` is stable).
pub fn top_n(mut tuples: Vec<SampleTuple>, n: usize) -> Vec<SampleTuple> {
    tuples.sort_by(|a, b| b.sample_value.total_cmp(&a.sample_value));
    tuples.truncate(n);
    tuples.reverse();
    tuples
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/samples.rs"]
mod tests;
