use reqwasm::http::Request;
use serde::de::DeserializeOwned;

use crate::config::ConsoleConfig;
use crate::domain::models::ModelPage;
use crate::shared::errors::{AppError, Result};

// API Service for centralized HTTP requests
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self {
            base_url: ConsoleConfig::default().api_base_url,
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| AppError::ModelRegistry(err.to_string()))?;

        if !response.ok() {
            return Err(AppError::ModelRegistry(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|err| AppError::ModelRegistry(err.to_string()))?;
        Ok(data)
    }

    // Specific API methods
    pub async fn get_models(&self) -> Result<ModelPage> {
        self.get("/api/models").await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}
