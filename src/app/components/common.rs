use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Empty-state placeholder for pages whose data source returned nothing
#[component]
pub fn EmptyState(icon: String, message: String) -> Element {
    rsx! {
        div { class: "c-empty",
            span { class: "c-empty__icon", "{icon}" }
            p { class: "c-empty__text", "{message}" }
        }
    }
}
