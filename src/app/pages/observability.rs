//! Observability surfaces

use dioxus::prelude::*;

use crate::app::components::EmptyState;

#[component]
pub fn TracingPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Tracing" }
            p { class: "c-page__subtitle",
                "Inspect end-to-end traces of application runs."
            }
            EmptyState {
                icon: "🛰️".to_string(),
                message: "No traces recorded in the selected window.".to_string(),
            }
        }
    }
}
