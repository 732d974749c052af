//! Evaluation surfaces: datasets, evaluators, experiments

use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState};

#[component]
pub fn DatasetsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Datasets" }
            p { class: "c-page__subtitle",
                "Curated input/expectation pairs used to score applications."
            }
            EmptyState {
                icon: "🗂️".to_string(),
                message: "No evaluation datasets.".to_string(),
            }
        }
    }
}

#[component]
pub fn EvaluatorsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Evaluators" }
            p { class: "c-page__subtitle",
                "Scoring functions, from exact match to model-graded rubrics."
            }
            EmptyState {
                icon: "📊".to_string(),
                message: "No evaluators configured.".to_string(),
            }
        }
    }
}

#[component]
pub fn ExperimentsPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Experiments" }
            p { class: "c-page__subtitle",
                "Run a dataset through an application and collect evaluator scores."
            }
            EmptyState {
                icon: "⚗️".to_string(),
                message: "No experiments have been run.".to_string(),
            }
        }
    }
}

/// Debug console for evaluator runs. Reached from the evaluator screens,
/// which is why the menu keeps the evaluator entry highlighted here.
#[component]
pub fn EvaluationDebugPage() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Evaluator Debug" }
            Card {
                title: "Single-case run".to_string(),
                p { "Execute one evaluator against a single dataset case and inspect the raw verdict." }
            }
        }
    }
}
