use std::collections::HashMap;

use dioxus::prelude::*;

use crate::domain::models::Model;

#[cfg(target_arch = "wasm32")]
use crate::shared::logging::{log_model_fetch_error, log_model_fetch_result};
#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Shared model registry, loaded once when the shell mounts and read by the
/// admin pages. A failed fetch leaves the list empty; the console keeps
/// working without it.
#[derive(Clone, Copy)]
pub struct ModelsContext {
    pub models: Signal<Vec<Model>>,
}

impl ModelsContext {
    /// Map of model id to display name for label rendering.
    pub fn name_map(&self) -> HashMap<u64, String> {
        self.models
            .read()
            .iter()
            .map(|model| (model.id, model.name.clone()))
            .collect()
    }
}

/// Install the models context and kick off the registry fetch.
/// Call once from the shell layout.
pub fn use_models_provider() -> ModelsContext {
    let models = use_signal(Vec::new);
    let context = use_context_provider(|| ModelsContext { models });

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let mut models = context.models;
            spawn(async move {
                match ApiService::new().get_models().await {
                    Ok(page) => {
                        log_model_fetch_result(page.page_items.len());
                        models.set(page.page_items);
                    }
                    Err(err) => {
                        log_model_fetch_error(&err.to_string());
                    }
                }
            });
        }
    });

    context
}

/// Read the models context installed by the shell layout.
pub fn use_models() -> ModelsContext {
    use_context::<ModelsContext>()
}
