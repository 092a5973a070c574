pub mod loader;
pub mod schema;

pub use loader::{DEFAULT_DATA_PATH, DataSource, load_dataset};
