//! Studio surfaces: app builder, applications, MCP, components, knowledge

use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState, MarkdownView};

/// Landing surface for the console; the root path aliases here.
#[component]
pub fn BuildPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "App Builder" }
            p { class: "c-page__subtitle",
                "Assemble agent applications from prompts, models, components and knowledge bases."
            }
            div { class: "c-page__grid",
                Card {
                    title: "Start from scratch".to_string(),
                    featured: true,
                    p { "Create an empty agent application and wire up its model and tools." }
                }
                Card {
                    title: "Import a schema".to_string(),
                    p { "Bootstrap an application from an existing agent schema definition." }
                }
                Card {
                    title: "Convert a Dify app".to_string(),
                    p { "Bring an existing Dify workflow into the studio." }
                }
            }
        }
    }
}

#[component]
pub fn ApplicationsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Applications" }
            p { class: "c-page__subtitle", "Manage deployed agent applications." }
            EmptyState {
                icon: "📦".to_string(),
                message: "No applications yet. Build one from the App Builder.".to_string(),
            }
        }
    }
}

#[component]
pub fn McpPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "MCP" }
            p { class: "c-page__subtitle",
                "Register MCP servers and expose their tools to your applications."
            }
            EmptyState {
                icon: "🔌".to_string(),
                message: "No MCP servers registered.".to_string(),
            }
        }
    }
}

#[component]
pub fn ComponentsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Components" }
            p { class: "c-page__subtitle",
                "Reusable building blocks shared across applications."
            }
            EmptyState {
                icon: "🧰".to_string(),
                message: "No components published.".to_string(),
            }
        }
    }
}

const KNOWLEDGE_GUIDE: &str = r#"
## Knowledge bases

A knowledge base groups documents that applications retrieve from at runtime.

- Upload documents and they are chunked and indexed automatically
- Attach a knowledge base to an application under its retrieval settings
- Retrieval quality can be checked from the test panel

| Stage | What happens |
|-------|--------------|
| Ingest | Documents are split into chunks |
| Index | Chunks are embedded and stored |
| Retrieve | Queries return the closest chunks |
"#;

#[component]
pub fn KnowledgePage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Knowledge Base" }
            Card {
                MarkdownView { content: KNOWLEDGE_GUIDE.to_string() }
            }
        }
    }
}
