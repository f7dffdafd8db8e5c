//! Theme management with localStorage persistence.
//!
//! The current theme lives in a signal at the app root; every change is
//! written through to the preference store and mirrored onto the document
//! root as a `dark` class for the stylesheet.

use dioxus::prelude::*;

use super::prefs::{LocalStorage, PreferenceStore};

/// Preference key for the persisted theme.
pub const THEME_KEY: &str = "ecotribe-theme";

/// Visual mode for the whole page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
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

    /// Parse a persisted value. Anything unrecognized is rejected so a
    /// corrupt preference falls back to the default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Resolve the theme for a fresh page load.
///
/// A valid persisted value wins. Otherwise the page defaults to dark for the
/// premium feel; the system color-scheme preference is consulted by the
/// caller but deliberately does not change the outcome.
pub fn initial_theme<S: PreferenceStore>(prefs: &S, _system_prefers_dark: bool) -> Theme {
    prefs
        .load(THEME_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(Theme::Dark)
}

/// Flip the theme and write the new value through to the store.
pub fn toggle_theme<S: PreferenceStore>(current: Theme, prefs: &S) -> Theme {
    let next = current.toggled();
    prefs.store(THEME_KEY, next.as_str());
    next
}

/// Global theme state shared via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    current: Signal<Theme>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Flip dark/light, persist, and update the document root class.
    pub fn toggle(&self) {
        let next = toggle_theme(self.get(), &LocalStorage);
        let mut current = self.current;
        current.set(next);
        apply_theme_to_dom(next);
        tracing::debug!("theme toggled to {}", next.as_str());
    }
}

/// Initialize theme context provider - call once at app root.
pub fn use_theme_provider() {
    let current = use_signal(Theme::default);

    use_context_provider(|| ThemeContext { current });

    // Client-side only: resolve from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let mut current = current;
        let resolved = initial_theme(&LocalStorage, system_prefers_dark());
        current.set(resolved);
        apply_theme_to_dom(resolved);
        tracing::debug!("theme initialized to {}", resolved.as_str());
    });
}

/// Get theme context - use in any component.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|m| m.matches())
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let result = match theme {
                    Theme::Dark => root.class_list().add_1("dark"),
                    Theme::Light => root.class_list().remove_1("dark"),
                };
                let _ = result;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_to_dom(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prefs::MemoryStore;

    #[test]
    fn toggle_alternates_strictly() {
        let mut theme = Theme::Dark;
        for n in 1..=6 {
            theme = theme.toggled();
            let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected, "after {n} toggles");
        }
    }

    #[test]
    fn toggle_writes_through_to_store() {
        let prefs = MemoryStore::default();
        let theme = toggle_theme(Theme::Dark, &prefs);
        assert_eq!(theme, Theme::Light);
        assert_eq!(prefs.load(THEME_KEY), Some("light".to_string()));

        let theme = toggle_theme(theme, &prefs);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(prefs.load(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn persisted_value_wins_on_load() {
        let prefs = MemoryStore::default();
        prefs.store(THEME_KEY, "light");
        assert_eq!(initial_theme(&prefs, true), Theme::Light);
        assert_eq!(initial_theme(&prefs, false), Theme::Light);
    }

    #[test]
    fn defaults_to_dark_regardless_of_system_preference() {
        let prefs = MemoryStore::default();
        assert_eq!(initial_theme(&prefs, true), Theme::Dark);
        assert_eq!(initial_theme(&prefs, false), Theme::Dark);
    }

    #[test]
    fn corrupt_persisted_value_falls_back_to_dark() {
        let prefs = MemoryStore::default();
        prefs.store(THEME_KEY, "sepia");
        assert_eq!(initial_theme(&prefs, false), Theme::Dark);
    }

    #[test]
    fn parse_round_trips_known_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    }
}
