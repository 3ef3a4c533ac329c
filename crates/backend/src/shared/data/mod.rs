pub mod file_source;
pub mod postgrest;
pub mod snapshot;
pub mod source;

pub use file_source::FileSource;
pub use postgrest::PostgrestSource;
pub use snapshot::Snapshot;
pub use source::DataSource;
