//! End-to-end flow over the theme and view state containers.
//!
//! Drives the same sequence a visitor would: fresh load, theme toggle,
//! navigate to login, sign in, sign out. Uses the in-memory preference
//! store so the whole flow runs headless.

use ecotribe::app::prefs::{MemoryStore, PreferenceStore};
use ecotribe::app::theme::{initial_theme, toggle_theme, Theme, THEME_KEY};
use ecotribe::app::view::{View, ViewState};

#[test]
fn first_visit_toggles_theme_then_tours_the_portal() {
    let prefs = MemoryStore::default();

    // Fresh load, nothing persisted: dark wins even if the system asks for light
    let mut theme = initial_theme(&prefs, false);
    assert_eq!(theme, Theme::Dark);

    let mut views = ViewState::default();
    assert_eq!(views.current(), View::Home);

    // Visitor flips to light; the choice is written through immediately
    theme = toggle_theme(theme, &prefs);
    assert_eq!(theme, Theme::Light);
    assert_eq!(prefs.load(THEME_KEY), Some("light".to_string()));

    // Into the portal and back out
    views.navigate(View::Login);
    assert_eq!(views.current(), View::Login);

    views.login_succeeded();
    assert_eq!(views.current(), View::Admin);

    views.logout();
    assert_eq!(views.current(), View::Home);

    // Theme is untouched by view traffic
    assert_eq!(theme, Theme::Light);
}

#[test]
fn persisted_choice_survives_a_reload() {
    let prefs = MemoryStore::default();

    let theme = toggle_theme(initial_theme(&prefs, false), &prefs);
    assert_eq!(theme, Theme::Light);

    // "Reload": view resets, theme comes back from the store
    let views = ViewState::default();
    assert_eq!(views.current(), View::Home);
    assert_eq!(initial_theme(&prefs, false), Theme::Light);
}

#[test]
fn even_toggle_count_restores_the_initial_theme() {
    let prefs = MemoryStore::default();
    let initial = initial_theme(&prefs, false);

    let mut theme = initial;
    for _ in 0..4 {
        theme = toggle_theme(theme, &prefs);
    }
    assert_eq!(theme, initial);
    assert_eq!(prefs.load(THEME_KEY), Some(initial.as_str().to_string()));
}
