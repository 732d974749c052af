//! Console configuration
//!
//! Small knobs for the shell: where the model registry API lives and which
//! surface the root path lands on. Server builds honor environment
//! overrides; the browser build uses same-origin defaults.

/// Runtime configuration for the console shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL for the admin API. Empty means same origin.
    pub api_base_url: String,
    /// Menu key of the default landing surface, the alias target of `/`.
    pub default_route: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            default_route: "/build".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load the server-side configuration, applying `STUDIO_API_BASE_URL`
    /// when set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("STUDIO_API_BASE_URL") {
            config.api_base_url = base_url;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert!(config.api_base_url.is_empty());
        assert_eq!(config.default_route, "/build");
    }
}
