use thiserror::Error;

use crate::domain::navigation::MenuError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Menu configuration error: {0}")]
    MenuConfig(#[from] MenuError),

    #[error("Model registry error: {0}")]
    ModelRegistry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
