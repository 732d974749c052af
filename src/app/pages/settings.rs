//! Settings surface, including the configured model registry

use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState};
use crate::shared::hooks::use_models;

#[component]
pub fn SettingsPage() -> Element {
    let models = use_models();
    let model_list = models.models.read().clone();

    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Settings" }
            Card {
                title: "Model Services".to_string(),
                if model_list.is_empty() {
                    EmptyState {
                        icon: "🤖".to_string(),
                        message: "No models configured.".to_string(),
                    }
                } else {
                    ul { class: "c-model-list",
                        for model in model_list.iter() {
                            li { class: "c-model-list__item", key: "{model.id}",
                                span { class: "c-model-list__name", "{model.name}" }
                                span { class: "c-model-list__provider", "{model.provider}" }
                                span { class: "c-model-list__updated",
                                    {model.updated_at.format("%Y-%m-%d").to_string()}
                                }
                            }
                        }
                    }
                }
            }
            Card {
                title: "Appearance".to_string(),
                p { "Use the toggle in the header to switch between light and dark themes. The choice is remembered on this device." }
            }
        }
    }
}
