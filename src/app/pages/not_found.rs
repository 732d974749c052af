use dioxus::prelude::*;

use crate::app::components::EmptyState;
use crate::app::pages::routes::Route;

/// Catch-all page. The path stays verbatim in the address bar and the menu
/// highlights nothing, so the shell keeps working around an unknown surface.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Page not found" }
            EmptyState {
                icon: "🧭".to_string(),
                message: format!("Nothing lives at {path}."),
            }
            Link {
                to: Route::Home {},
                class: "c-button",
                "Back to the App Builder"
            }
        }
    }
}
