use std::collections::HashMap;

use crate::input::schema::Dataset;
use crate::model::subject::Subject;

/// Subjects keyed by name, built once per session from the validated dataset.
#[derive(Debug, Clone)]
pub struct SubjectIndex {
    names: Vec<String>,
    subjects: Vec<Subject>,
    by_name: HashMap<String, usize>,
}

impl SubjectIndex {
    pub fn build(dataset: Dataset) -> Self {
        let Dataset {
            names,
            metadata,
            samples,
        } = dataset;

        let mut subjects = Vec::with_capacity(names.len());
        let mut by_name = HashMap::with_capacity(names.len());

        for (idx, ((name, metadata), samples)) in names
            .iter()
            .zip(metadata)
            .zip(samples)
            .enumerate()
        {
            if by_name.contains_key(name) {
                tracing::warn!(
                    subject = %name,
                    position = idx,
                    "duplicate subject name; lookups resolve to the first occurrence"
                );
            } else {
                by_name.insert(name.clone(), subjects.len());
            }
            subjects.push(Subject {
                name: name.clone(),
                metadata,
                samples,
            });
        }

        SubjectIndex {
            names,
            subjects,
            by_name,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Subject> {
        self.by_name.get(name).map(|&idx| &self.subjects[idx])
    }

    /// Selector options, in dataset order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/index.rs"]
mod tests;
