use async_trait::async_trait;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::LevelCell;
use serde::de::DeserializeOwned;

use super::source::{fetch_all_pages, DataSource};
use crate::shared::config::SourceConfig;
use crate::shared::error::SourceError;

/// HTTP client for a hosted PostgREST backend (Supabase style)
pub struct PostgrestSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    employees_table: String,
    levels_table: String,
    batch_size: usize,
}

impl PostgrestSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let base_url = config
            .url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| SourceError::Config("source.url is required for postgrest".into()))?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Config(format!("cannot build HTTP client: {}", e)))?;

        // Keys pasted from dashboards often carry stray whitespace
        let api_key = config
            .api_key
            .as_deref()
            .map(|k| k.trim().replace(['\n', '\r', '\t'], ""))
            .filter(|k| !k.is_empty());

        Ok(Self {
            client,
            base_url,
            api_key,
            employees_table: config.employees_table.clone(),
            levels_table: config.levels_table.clone(),
            batch_size: config.batch_size,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        table: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>, SourceError> {
        let mut request = self
            .client
            .get(self.table_url(table))
            .query(&page_query(offset, limit));

        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key.as_str())
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await.map_err(|e| SourceError::Http {
            table: table.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| SourceError::Http {
            table: table.to_string(),
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| SourceError::Decode {
            table: table.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetches every row of `table`, `batch_size` rows per request
    pub async fn fetch_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, SourceError> {
        let this = self;
        let rows = fetch_all_pages(self.batch_size, move |offset, limit| {
            tracing::debug!("Fetching {} rows {}..{}", table, offset, offset + limit);
            this.fetch_page(table, offset, limit)
        })
        .await?;

        tracing::info!("Fetched {} rows from {}", rows.len(), table);
        Ok(rows)
    }
}

/// Query string of one page. Rows are ordered by id so that consecutive
/// offset windows neither repeat nor skip rows.
fn page_query(offset: usize, limit: usize) -> [(&'static str, String); 4] {
    [
        ("select", "*".to_string()),
        ("order", "id.asc".to_string()),
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
    ]
}

#[async_trait]
impl DataSource for PostgrestSource {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, SourceError> {
        self.fetch_all(&self.employees_table).await
    }

    async fn fetch_levels(&self) -> Result<Vec<LevelCell>, SourceError> {
        self.fetch_all(&self.levels_table).await
    }

    fn source_name(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SourceKind;

    fn config(url: Option<&str>) -> SourceConfig {
        SourceConfig {
            kind: SourceKind::Postgrest,
            url: url.map(String::from),
            api_key: Some(" key\n".into()),
            employees_table: "rf_servidores".into(),
            levels_table: "rf_niveis".into(),
            batch_size: 1000,
            timeout_secs: 5,
            employees_path: None,
            levels_path: None,
        }
    }

    #[test]
    fn test_requires_url() {
        assert!(matches!(
            PostgrestSource::new(&config(None)),
            Err(SourceError::Config(_))
        ));
        assert!(matches!(
            PostgrestSource::new(&config(Some("  "))),
            Err(SourceError::Config(_))
        ));
    }

    #[test]
    fn test_table_url_and_key_cleanup() {
        let source = PostgrestSource::new(&config(Some("https://x.supabase.co/rest/v1/"))).unwrap();
        assert_eq!(
            source.table_url("rf_niveis"),
            "https://x.supabase.co/rest/v1/rf_niveis"
        );
        assert_eq!(source.api_key.as_deref(), Some("key"));
        assert_eq!(source.source_name(), "https://x.supabase.co/rest/v1");
    }

    #[test]
    fn test_pages_are_ordered_by_id() {
        let query = page_query(2000, 1000);
        assert!(query.contains(&("order", "id.asc".to_string())));
        assert!(query.contains(&("offset", "2000".to_string())));
        assert!(query.contains(&("limit", "1000".to_string())));
    }
}
