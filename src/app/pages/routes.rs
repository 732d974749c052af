//! Route table and application shell
//!
//! Every surface the menu knows about gets a route; the catch-all keeps
//! unknown paths inside the shell where they simply highlight nothing.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::{Header, PureLayout, SideMenu};
use crate::app::pages::developer::{AgentSchemaPage, DebugPage, DifyImportPage};
use crate::app::pages::evaluation::{
    DatasetsPage, EvaluationDebugPage, EvaluatorsPage, ExperimentsPage,
};
use crate::app::pages::login::LoginPage;
use crate::app::pages::not_found::NotFoundPage;
use crate::app::pages::observability::TracingPage;
use crate::app::pages::prompts::{PlaygroundPage, PromptsPage, VersionHistoryPage};
use crate::app::pages::settings::SettingsPage;
use crate::app::pages::studio::{
    ApplicationsPage, BuildPage, ComponentsPage, KnowledgePage, McpPage,
};
use crate::shared::hooks::use_models_provider;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Root is an alias of the app builder landing surface
    #[route("/")]
    Home {},

    // Studio surfaces
    #[route("/build")]
    Build {},
    #[route("/app")]
    Applications {},
    #[route("/mcp")]
    Mcp {},
    #[route("/component")]
    Components {},
    #[route("/knowledge")]
    Knowledge {},

    // Prompt engineering surfaces
    #[route("/admin/prompts")]
    Prompts {},
    #[route("/admin/playground")]
    Playground {},
    #[route("/admin/version-history")]
    VersionHistory {},

    // Evaluation surfaces
    #[route("/admin/evaluation/gather")]
    Datasets {},
    #[route("/admin/evaluation/evaluator")]
    Evaluators {},
    #[route("/admin/evaluation/experiment")]
    Experiments {},
    #[route("/admin/evaluation/debug")]
    EvaluationDebug {},

    // Observability
    #[route("/admin/tracing")]
    Tracing {},

    // Developer surfaces
    #[route("/debug")]
    Debug {},
    #[route("/dify")]
    DifyImport {},
    #[route("/agent-schema")]
    AgentSchema {},

    // Settings (top-level menu leaf)
    #[route("/setting")]
    Settings {},

    // Login renders without the sidebar
    #[route("/login")]
    Login {},

    // Unknown paths stay inside the shell and highlight nothing
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Agent Studio console initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();
    // The login surface hides the sidebar entirely
    let hide_sidebar = matches!(route, Route::Login {});

    use_models_provider();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        if hide_sidebar {
            PureLayout {
                Header {}
                div { class: "c-layout__pure-body",
                    Outlet::<Route> {}
                }
            }
        } else {
            div { class: "c-layout",
                SideMenu {}
                div { class: "c-layout__body",
                    Header {}
                    main { class: "c-layout__main",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

// Route components delegate to the page modules; the root path renders the
// same surface the classifier aliases it to.
#[component]
fn Home() -> Element {
    rsx! { BuildPage {} }
}

#[component]
fn Build() -> Element {
    rsx! { BuildPage {} }
}

#[component]
fn Applications() -> Element {
    rsx! { ApplicationsPage {} }
}

#[component]
fn Mcp() -> Element {
    rsx! { McpPage {} }
}

#[component]
fn Components() -> Element {
    rsx! { ComponentsPage {} }
}

#[component]
fn Knowledge() -> Element {
    rsx! { KnowledgePage {} }
}

#[component]
fn Prompts() -> Element {
    rsx! { PromptsPage {} }
}

#[component]
fn Playground() -> Element {
    rsx! { PlaygroundPage {} }
}

#[component]
fn VersionHistory() -> Element {
    rsx! { VersionHistoryPage {} }
}

#[component]
fn Datasets() -> Element {
    rsx! { DatasetsPage {} }
}

#[component]
fn Evaluators() -> Element {
    rsx! { EvaluatorsPage {} }
}

#[component]
fn Experiments() -> Element {
    rsx! { ExperimentsPage {} }
}

#[component]
fn EvaluationDebug() -> Element {
    rsx! { EvaluationDebugPage {} }
}

#[component]
fn Tracing() -> Element {
    rsx! { TracingPage {} }
}

#[component]
fn Debug() -> Element {
    rsx! { DebugPage {} }
}

#[component]
fn DifyImport() -> Element {
    rsx! { DifyImportPage {} }
}

#[component]
fn AgentSchema() -> Element {
    rsx! { AgentSchemaPage {} }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundPage { segments } }
}
