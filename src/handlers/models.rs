use axum::{http::StatusCode, Json};
use chrono::{TimeZone, Utc};

use crate::domain::models::{Model, ModelPage};
use crate::shared::logging::log_model_fetch_result;

/// Built-in model registry. The console only needs names and providers for
/// labels; a real deployment replaces this endpoint with the platform's
/// model-service API.
fn registry() -> Vec<Model> {
    vec![
        Model {
            id: 1,
            name: "qwen-max".to_string(),
            provider: "dashscope".to_string(),
            capabilities: vec!["chat".to_string(), "tools".to_string()],
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        },
        Model {
            id: 2,
            name: "qwen-plus".to_string(),
            provider: "dashscope".to_string(),
            capabilities: vec!["chat".to_string()],
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        },
        Model {
            id: 3,
            name: "deepseek-v3".to_string(),
            provider: "deepseek".to_string(),
            capabilities: vec!["chat".to_string(), "tools".to_string()],
            updated_at: Utc.with_ymd_and_hms(2025, 6, 10, 8, 30, 0).unwrap(),
        },
    ]
}

/// GET /api/models
/// List the configured models for the admin pages
pub async fn list_models_handler() -> Result<Json<ModelPage>, StatusCode> {
    let page_items = registry();
    log_model_fetch_result(page_items.len());
    let total_count = page_items.len();
    Ok(Json(ModelPage {
        page_items,
        total_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_models_returns_full_registry() {
        let Json(page) = list_models_handler().await.unwrap();
        assert_eq!(page.total_count, page.page_items.len());
        assert!(page.page_items.iter().any(|m| m.name == "qwen-max"));
    }
}
