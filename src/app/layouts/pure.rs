use dioxus::prelude::*;

/// Chrome-less wrapper used by surfaces that hide the sidebar (login).
#[component]
pub fn PureLayout(children: Element) -> Element {
    rsx! {
        div { class: "c-pure-layout",
            {children}
        }
    }
}
