use dioxus::prelude::*;

use crate::app::components::ThemeToggle;

/// Top bar spanning the content area: page brand on the left, chrome
/// actions (theme toggle) on the right.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-header__title", "Agent Studio" }
            div { class: "c-header__actions",
                ThemeToggle {}
            }
        }
    }
}
