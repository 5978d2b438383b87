use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::repositories::store::StoreCatalog;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Body of the store diagnostics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        DiagnosticsReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

pub struct DiagnosticsService {
    catalog: Option<Arc<dyn StoreCatalog>>,
    database_url_set: bool,
    database_name: Option<String>,
}

impl DiagnosticsService {
    pub fn new(
        catalog: Option<Arc<dyn StoreCatalog>>,
        database_url_set: bool,
        database_name: Option<String>,
    ) -> Self {
        DiagnosticsService {
            catalog,
            database_url_set,
            database_name,
        }
    }

    /// Never fails: store errors are folded into the report.
    pub async fn report(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport::default();

        let Some(catalog) = &self.catalog else {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        };

        report.database = "✅ Available".to_string();
        report.database_url = Some(if self.database_url_set {
            "✅ Set".to_string()
        } else {
            "❌ Not Set".to_string()
        });
        report.database_name = Some(
            self.database_name
                .clone()
                .unwrap_or_else(|| "❌ Not Set".to_string()),
        );
        report.connection_status = "Connected".to_string();

        match catalog.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                warn!("Failed to list collections: {}", e);
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(e.detail(), MAX_ERROR_CHARS)
                );
            }
        }
        report
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
