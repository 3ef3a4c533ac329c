use async_trait::async_trait;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::LevelCell;
use std::future::Future;

use crate::shared::config::{SourceConfig, SourceKind};
use crate::shared::error::SourceError;

use super::{FileSource, PostgrestSource};

/// Supplier of the two input collections.
///
/// Each call returns the complete collection or fails; partial data is never returned.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, SourceError>;

    async fn fetch_levels(&self) -> Result<Vec<LevelCell>, SourceError>;

    /// Human-readable name used in logs
    fn source_name(&self) -> &str;
}

/// Builds the data source selected by configuration
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn DataSource>, SourceError> {
    match config.kind {
        SourceKind::Postgrest => Ok(Box::new(PostgrestSource::new(config)?)),
        SourceKind::File => Ok(Box::new(FileSource::from_config(config)?)),
    }
}

/// Reads a table page by page until a page comes back empty or short.
///
/// `fetch_page(offset, limit)` must return at most `limit` rows starting at `offset`.
pub async fn fetch_all_pages<T, F, Fut>(
    batch_size: usize,
    mut fetch_page: F,
) -> Result<Vec<T>, SourceError>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, SourceError>>,
{
    if batch_size == 0 {
        return Err(SourceError::Config("batch_size must be positive".into()));
    }

    let mut all = Vec::new();
    let mut offset = 0;

    loop {
        let page = fetch_page(offset, batch_size).await?;
        let received = page.len();
        all.extend(page);

        if received < batch_size {
            break;
        }
        offset += batch_size;
    }

    Ok(all)
}
