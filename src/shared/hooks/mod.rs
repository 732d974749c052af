// Custom Dioxus hooks
pub mod use_models;
pub mod use_theme;

pub use use_models::{use_models, use_models_provider, ModelsContext};
pub use use_theme::{apply_theme_css, save_theme, use_theme, Theme};
