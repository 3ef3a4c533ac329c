use chrono::{DateTime, Utc};
use contracts::domain::a001_employee::{Employee, EmployeeId};
use contracts::domain::a002_level_cell::{Level, LevelCell};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::{Arc, RwLock};

use super::source::DataSource;
use crate::shared::error::{DashboardError, SourceError};
use crate::shared::levels::group_levels;

static SOURCE: OnceCell<Box<dyn DataSource>> = OnceCell::new();
static CURRENT: Lazy<RwLock<Option<Arc<Snapshot>>>> = Lazy::new(|| RwLock::new(None));

/// Held by tests that publish into the process-wide snapshot
#[cfg(test)]
pub(crate) static PUBLISH_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Immutable copy of both tables plus the levels grouped from them
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    pub cells: Vec<LevelCell>,
    pub levels: Vec<Level>,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(employees: Vec<Employee>, cells: Vec<LevelCell>) -> Self {
        let levels = group_levels(&cells, &employees);
        Self {
            employees,
            cells,
            levels,
            loaded_at: Utc::now(),
        }
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Registers the data source used by `reload`. Only the first call has an effect.
pub fn install_source(source: Box<dyn DataSource>) -> anyhow::Result<()> {
    SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("data source already installed"))
}

/// Fetches both tables. Either both arrive complete or an error is returned.
pub async fn fetch(source: &dyn DataSource) -> Result<Snapshot, SourceError> {
    tracing::info!("Loading snapshot from {}", source.source_name());
    let employees = source.fetch_employees().await?;
    let cells = source.fetch_levels().await?;
    let snapshot = Snapshot::new(employees, cells);
    tracing::info!(
        "Snapshot ready: {} employees, {} grid cells, {} levels",
        snapshot.employees.len(),
        snapshot.cells.len(),
        snapshot.levels.len()
    );
    Ok(snapshot)
}

/// Replaces the current snapshot
pub fn publish(snapshot: Snapshot) -> Arc<Snapshot> {
    let snapshot = Arc::new(snapshot);
    let mut guard = CURRENT.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(snapshot.clone());
    snapshot
}

/// Re-fetches from the installed source. On failure the previous snapshot stays.
pub async fn reload() -> Result<Arc<Snapshot>, DashboardError> {
    let source = SOURCE
        .get()
        .ok_or_else(|| SourceError::Config("no data source installed".into()))?;
    let snapshot = fetch(source.as_ref()).await?;
    Ok(publish(snapshot))
}

pub fn current() -> Result<Arc<Snapshot>, DashboardError> {
    CURRENT
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
        .ok_or(DashboardError::SnapshotNotLoaded)
}
