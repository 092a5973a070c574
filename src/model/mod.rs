pub mod index;
pub mod samples;
pub mod subject;

pub use index::SubjectIndex;
pub use samples::{project, top_n};
pub use subject::{MetaValue, MetadataRecord, SamplesRecord, Subject};
