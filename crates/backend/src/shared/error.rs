use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the external data source. A fetch either completes or fails as a whole.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error while fetching {table}: {source}")]
    Http {
        table: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Source returned HTTP {status} for {table}: {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },

    #[error("Cannot decode rows of {table}: {message}")]
    Decode { table: String, message: String },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid source configuration: {0}")]
    Config(String),
}

/// Failures surfaced by the dashboard services
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Snapshot is not loaded yet")]
    SnapshotNotLoaded,

    #[error("Level not found: {0}")]
    LevelNotFound(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::SnapshotNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            DashboardError::LevelNotFound(_) | DashboardError::EmployeeNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Source(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
