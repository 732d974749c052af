use dioxus::prelude::*;
use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
use crate::shared::logging::log_theme_change;

/// Console color scheme, persisted in localStorage under `theme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Theme matching the OS-level preference.
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            _ => Ok(Theme::Dark), // Default to dark
        }
    }
}

/// Theme hook: loads the persisted theme on mount, falling back to the
/// system preference, and applies it to the document element.
pub fn use_theme() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Light);

    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let mut loaded = false;
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        if let Ok(Some(saved)) = storage.get_item("theme") {
                            if let Ok(theme) = saved.parse::<Theme>() {
                                current_theme.set(theme);
                                apply_theme_css(theme).await;
                                loaded = true;
                            }
                        }
                    }
                }

                if !loaded {
                    let script = r#"
                        window.matchMedia('(prefers-color-scheme: dark)').matches
                    "#;
                    if let Ok(result) = document::eval(script).await {
                        if let Some(is_dark) = result.as_bool() {
                            let system_theme = Theme::system_default(is_dark);
                            current_theme.set(system_theme);
                            apply_theme_css(system_theme).await;
                        }
                    }
                }
            }
        });
    });

    current_theme
}

/// Apply theme CSS classes to document element
#[cfg(target_arch = "wasm32")]
pub async fn apply_theme_css(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('dark', 'light');
            root.classList.add('{}');
        }})()
    "#,
        theme.as_str()
    );

    let _ = document::eval(&script).await;
    log_theme_change(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn apply_theme_css(theme: Theme) {
    // No-op on server
    let _ = theme;
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("theme", theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        // Unknown values fall back to dark rather than erroring.
        assert_eq!("solarized".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn test_toggle_flips_between_variants() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_system_default() {
        assert!(Theme::system_default(true).is_dark());
        assert!(!Theme::system_default(false).is_dark());
    }
}
