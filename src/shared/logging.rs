//! Structured logging module for the Agent Studio console
//!
//! Provides consistent, contextual logging across the shell.
//! Uses structured fields so navigation behavior can be traced in production.

/// Log categories for the console's operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Classification,
    MenuValidation,
    Navigation,
    SidebarToggle,
    ModelFetch,
    ThemeChange,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Classification => "classification",
            LogOperation::MenuValidation => "menu_validation",
            LogOperation::Navigation => "navigation",
            LogOperation::SidebarToggle => "sidebar_toggle",
            LogOperation::ModelFetch => "model_fetch",
            LogOperation::ThemeChange => "theme_change",
        }
    }
}

/// Log a navigation intent emitted by a menu click
pub fn log_navigation_request(key: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        key = key,
        "Menu navigation requested"
    );
}

/// Log a confirmed path change and the selection it produced
pub fn log_path_classified(path: &str, key: &str) {
    tracing::debug!(
        operation = LogOperation::Classification.as_str(),
        path = path,
        key = key,
        "Path classified to menu key"
    );
}

/// Log a path that fell through to the identity fallback
pub fn log_fallback_path(path: &str) {
    tracing::debug!(
        operation = LogOperation::Classification.as_str(),
        path = path,
        "No classification rule matched, path used verbatim"
    );
}

/// Log a sidebar collapse/expand toggle
pub fn log_sidebar_toggle(collapsed: bool) {
    tracing::debug!(
        operation = LogOperation::SidebarToggle.as_str(),
        collapsed = collapsed,
        "Sidebar collapse toggled"
    );
}

/// Log model registry fetch result
pub fn log_model_fetch_result(count: usize) {
    tracing::info!(
        operation = LogOperation::ModelFetch.as_str(),
        model_count = count,
        "Model registry loaded"
    );
}

/// Log model registry fetch failure (console keeps working with an empty list)
pub fn log_model_fetch_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ModelFetch.as_str(),
        error = error,
        "Failed to load model registry"
    );
}

/// Log a theme switch
pub fn log_theme_change(theme: &str) {
    tracing::debug!(
        operation = LogOperation::ThemeChange.as_str(),
        theme = theme,
        "Theme changed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Classification.as_str(), "classification");
        assert_eq!(LogOperation::MenuValidation.as_str(), "menu_validation");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::SidebarToggle.as_str(), "sidebar_toggle");
        assert_eq!(LogOperation::ModelFetch.as_str(), "model_fetch");
        assert_eq!(LogOperation::ThemeChange.as_str(), "theme_change");
    }
}
