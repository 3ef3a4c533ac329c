use async_trait::async_trait;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::LevelCell;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::source::DataSource;
use crate::shared::config::{resolve_data_path, SourceConfig};
use crate::shared::error::SourceError;

/// Offline snapshot: each table exported as one JSON array
pub struct FileSource {
    employees_path: PathBuf,
    levels_path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(employees_path: PathBuf, levels_path: PathBuf) -> Self {
        let name = format!(
            "files ({}, {})",
            employees_path.display(),
            levels_path.display()
        );
        Self {
            employees_path,
            levels_path,
            name,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let employees = config
            .employees_path
            .as_deref()
            .ok_or_else(|| SourceError::Config("source.employees_path is required".into()))?;
        let levels = config
            .levels_path
            .as_deref()
            .ok_or_else(|| SourceError::Config("source.levels_path is required".into()))?;

        Ok(Self::new(
            resolve_data_path(employees),
            resolve_data_path(levels),
        ))
    }

    async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

        let rows: Vec<T> = serde_json::from_str(&contents).map_err(|e| SourceError::Decode {
            table: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, SourceError> {
        Self::read_rows(&self.employees_path).await
    }

    async fn fetch_levels(&self) -> Result<Vec<LevelCell>, SourceError> {
        Self::read_rows(&self.levels_path).await
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
