//! Model registry entities
//!
//! The admin pages share a read-only list of configured LLM models, loaded
//! once when the shell mounts and exposed through a context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One configured model from the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: u64,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Paged wrapper the registry endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPage {
    pub page_items: Vec<Model>,
    pub total_count: usize,
}

impl ModelPage {
    /// Map of model id to display name, as the pages consume it.
    pub fn name_map(&self) -> std::collections::HashMap<u64, String> {
        self.page_items
            .iter()
            .map(|model| (model.id, model.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ModelPage {
        ModelPage {
            page_items: vec![
                Model {
                    id: 1,
                    name: "qwen-max".to_string(),
                    provider: "dashscope".to_string(),
                    capabilities: vec!["chat".to_string()],
                    updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
                },
                Model {
                    id: 2,
                    name: "deepseek-v3".to_string(),
                    provider: "deepseek".to_string(),
                    capabilities: vec!["chat".to_string(), "tools".to_string()],
                    updated_at: Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
                },
            ],
            total_count: 2,
        }
    }

    #[test]
    fn test_name_map() {
        let page = sample();
        let map = page.name_map();
        assert_eq!(map.get(&1).map(String::as_str), Some("qwen-max"));
        assert_eq!(map.get(&2).map(String::as_str), Some("deepseek-v3"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let page = sample();
        let json = serde_json::to_string(&page).unwrap();
        let back: ModelPage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_missing_capabilities_defaults_to_empty() {
        let json = r#"{"id":9,"name":"m","provider":"p","updated_at":"2025-06-01T00:00:00Z"}"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert!(model.capabilities.is_empty());
    }
}
