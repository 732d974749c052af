use dioxus::prelude::*;

use crate::shared::hooks::{apply_theme_css, save_theme, use_theme};

/// Theme toggle for switching between the light and dark console themes.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let is_currently_light = !current_theme().is_dark();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggled();
        current_theme.set(new_theme);

        spawn(async move {
            apply_theme_css(new_theme).await;
            save_theme(new_theme).await;
        });
    };

    // Tooltip shows target state (what will happen on click)
    let target_theme = current_theme().toggled();
    let tooltip = format!("Switch to {} theme", target_theme.display_name());

    let toggle_class = if is_currently_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        div {
            class: "{toggle_class}",
            "data-tooltip": "{tooltip}",
            role: "button",
            tabindex: "0",
            aria_label: "Toggle light/dark theme",
            onclick: toggle_theme,

            span { class: "c-theme-toggle__icon", "{current_theme().icon()}" }
        }
    }
}
