//! Prompt engineering surfaces

use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState};
use crate::app::pages::routes::Route;

#[component]
pub fn PromptsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Prompts" }
            p { class: "c-page__subtitle",
                "Versioned prompt templates shared by your applications."
            }
            div { class: "c-page__actions",
                Link {
                    to: Route::Playground {},
                    class: "c-button",
                    "Open Playground"
                }
                Link {
                    to: Route::VersionHistory {},
                    class: "c-button c-button--ghost",
                    "Version History"
                }
            }
            EmptyState {
                icon: "📋".to_string(),
                message: "No prompts yet. Create one to get started.".to_string(),
            }
        }
    }
}

#[component]
pub fn PlaygroundPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Playground" }
            p { class: "c-page__subtitle",
                "Run a prompt against a configured model and inspect the output."
            }
            Card {
                title: "Session".to_string(),
                p { "Pick a prompt and a model to start a playground session." }
            }
        }
    }
}

/// Version history is a prompt surface: it lives under the prompts menu
/// entry even though it has its own route.
#[component]
pub fn VersionHistoryPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Version History" }
            EmptyState {
                icon: "🕘".to_string(),
                message: "No published versions.".to_string(),
            }
        }
    }
}
