//! Collapsible side menu bound to the router
//!
//! The sidebar controller owns all menu state; this component is the render
//! layer on top of it. Route changes flow in through `path_changed`, menu
//! clicks flow out as navigation pushes, and the collapse toggle lives in
//! the footer like the rest of the admin chrome.

use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::domain::navigation::{menu_tree, MenuNode, SidebarController};
use crate::shared::logging::{
    log_fallback_path, log_navigation_request, log_path_classified, log_sidebar_toggle,
};

#[component]
pub fn SideMenu() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    let initial_path = path.clone();
    let mut sidebar = use_signal(move || SidebarController::new(menu_tree(), &initial_path));

    // Re-classify whenever the router confirms a new path.
    use_effect(use_reactive!(|(path,)| {
        let mut sidebar = sidebar.write();
        sidebar.path_changed(&path);
        if menu_tree().contains(sidebar.selected_key()) {
            log_path_classified(&path, sidebar.selected_key());
        } else {
            log_fallback_path(&path);
        }
    }));

    let collapsed = sidebar.read().collapsed();
    let sidebar_class = if collapsed {
        "c-sidebar c-sidebar--collapsed"
    } else {
        "c-sidebar"
    };

    rsx! {
        aside { class: "{sidebar_class}",
            div { class: "c-sidebar__brand",
                span { class: "c-sidebar__logo", "🧩" }
                if !collapsed {
                    h1 { class: "c-sidebar__title", "Agent Studio" }
                }
            }

            nav { class: "c-sidebar__nav",
                ul { class: "c-menu",
                    for node in menu_tree().nodes() {
                        if node.is_group() {
                            MenuGroup { node: node.clone(), sidebar }
                        } else {
                            MenuLeaf { node: node.clone(), sidebar }
                        }
                    }
                }
            }

            div { class: "c-sidebar__footer",
                button {
                    class: "c-sidebar__collapse",
                    aria_label: "Toggle sidebar",
                    onclick: move |_| {
                        let mut sidebar = sidebar.write();
                        sidebar.toggle_collapse();
                        log_sidebar_toggle(sidebar.collapsed());
                    },
                    if collapsed {
                        span { "⏩" }
                    } else {
                        span { "⏪" }
                        span { class: "c-sidebar__collapse-label", "Collapse menu" }
                    }
                }
            }
        }
    }
}

/// A top-level group with its leaf entries, expanded when the controller
/// derives it open.
#[component]
fn MenuGroup(node: MenuNode, sidebar: Signal<SidebarController>) -> Element {
    let open = sidebar.read().is_group_open(node.key);
    let collapsed = sidebar.read().collapsed();
    let group_class = if open {
        "c-menu__group c-menu__group--open"
    } else {
        "c-menu__group"
    };

    rsx! {
        li { class: "{group_class}",
            div { class: "c-menu__group-header",
                span { class: "c-menu__icon", "{node.icon}" }
                if !collapsed {
                    span { class: "c-menu__label", "{node.label}" }
                }
            }
            if open {
                ul { class: "c-menu__children",
                    for child in node.children.iter() {
                        MenuLeaf { node: child.clone(), sidebar }
                    }
                }
            }
        }
    }
}

/// A clickable navigation entry. Clicking emits the navigation intent and
/// pushes it to the router; selection follows on the confirmed path change.
#[component]
fn MenuLeaf(node: MenuNode, sidebar: Signal<SidebarController>) -> Element {
    let nav = use_navigator();
    let selected = sidebar.read().is_selected(node.key);
    let collapsed = sidebar.read().collapsed();
    let item_class = if selected {
        "c-menu__item c-menu__item--selected"
    } else {
        "c-menu__item"
    };
    let key = node.key;

    rsx! {
        li { class: "{item_class}",
            button {
                class: "c-menu__link",
                onclick: move |_| {
                    let request = sidebar.read().menu_clicked(key);
                    log_navigation_request(&request.target);
                    nav.push(request.target.as_str());
                },
                span { class: "c-menu__icon", "{node.icon}" }
                if !collapsed {
                    span { class: "c-menu__label", "{node.label}" }
                }
            }
        }
    }
}
