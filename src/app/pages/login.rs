//! Login surface
//!
//! Authentication itself is handled by the platform; this page only renders
//! the chrome-less form shell. It is the one path the sidebar hides for.

use dioxus::prelude::*;

use crate::app::components::Card;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div { class: "c-page c-page--centered",
            Card {
                title: "Sign in".to_string(),
                featured: true,
                form { class: "c-login-form",
                    label { class: "c-login-form__label", "Username"
                        input {
                            class: "c-login-form__input",
                            r#type: "text",
                            name: "username",
                            autocomplete: "username",
                        }
                    }
                    label { class: "c-login-form__label", "Password"
                        input {
                            class: "c-login-form__input",
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                        }
                    }
                    button { class: "c-button", r#type: "submit", "Sign in" }
                }
            }
        }
    }
}
