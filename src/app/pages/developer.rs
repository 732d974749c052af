//! Developer surfaces: debug console, Dify import, agent schema

use dioxus::prelude::*;

use crate::app::components::{Card, MarkdownView};

#[component]
pub fn DebugPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Debug" }
            p { class: "c-page__subtitle",
                "Chat against a draft application configuration without publishing it."
            }
            Card {
                title: "Draft session".to_string(),
                p { "Debug sessions run against the latest saved draft of an application." }
            }
        }
    }
}

#[component]
pub fn DifyImportPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Dify Import" }
            p { class: "c-page__subtitle",
                "Convert a Dify application DSL export into a studio application."
            }
            Card {
                title: "Upload DSL".to_string(),
                p { "Drop a Dify YAML export here to map it onto studio primitives." }
            }
        }
    }
}

const SCHEMA_NOTES: &str = r#"
## Agent schema

The agent schema is the portable description of an application:

- model and generation parameters
- tool and MCP server bindings
- knowledge base attachments
- nested sub-agents

Schemas round-trip through the builder, so an exported schema can be
re-imported on another deployment without loss.
"#;

#[component]
pub fn AgentSchemaPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Agent Schema" }
            Card {
                MarkdownView { content: SCHEMA_NOTES.to_string() }
            }
        }
    }
}
