//! Top-level view switching between the landing page, the login form and
//! the admin portal.
//!
//! The view is deliberately not URL-routed: it resets to home on reload and
//! all transitions funnel through [`ViewState`], keeping mutation in one
//! place instead of scattered across components.

use dioxus::prelude::*;

/// Which top-level subtree is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Login,
    Admin,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Admin => "admin",
        }
    }
}

/// Explicit state container for the view switch.
///
/// Three states, fully connected, no guards. The login transition is
/// unconditional: credential verification is a stub by design.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    current: View,
}

impl ViewState {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn navigate(&mut self, target: View) {
        self.current = target;
    }

    /// Any submission counts as a successful login.
    pub fn login_succeeded(&mut self) {
        self.current = View::Admin;
    }

    pub fn logout(&mut self) {
        self.current = View::Home;
    }
}

/// Global view state shared via context.
#[derive(Clone, Copy)]
pub struct ViewContext {
    state: Signal<ViewState>,
}

impl ViewContext {
    /// Get the current view
    pub fn get(&self) -> View {
        (self.state)().current()
    }

    pub fn navigate(&self, target: View) {
        let mut state = self.state;
        state.write().navigate(target);
        tracing::debug!("view -> {}", target.as_str());
    }

    pub fn login_succeeded(&self) {
        let mut state = self.state;
        state.write().login_succeeded();
        tracing::debug!("login accepted, view -> admin");
    }

    pub fn logout(&self) {
        let mut state = self.state;
        state.write().logout();
        tracing::debug!("logout, view -> home");
    }
}

/// Initialize view context provider - call once at app root.
pub fn use_view_provider() -> ViewContext {
    let state = use_signal(ViewState::default);
    let ctx = ViewContext { state };
    use_context_provider(|| ctx);
    ctx
}

/// Get view context - use in any component.
pub fn use_view() -> ViewContext {
    use_context::<ViewContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(ViewState::default().current(), View::Home);
    }

    #[test]
    fn login_forces_admin() {
        let mut state = ViewState::default();
        state.navigate(View::Login);
        state.login_succeeded();
        assert_eq!(state.current(), View::Admin);
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut state = ViewState::default();
        state.login_succeeded();
        state.login_succeeded();
        assert_eq!(state.current(), View::Admin);

        state.logout();
        state.logout();
        assert_eq!(state.current(), View::Home);
    }

    #[test]
    fn every_view_is_reachable_from_every_other() {
        for start in [View::Home, View::Login, View::Admin] {
            for target in [View::Home, View::Login, View::Admin] {
                let mut state = ViewState::default();
                state.navigate(start);
                state.navigate(target);
                assert_eq!(state.current(), target);
            }
        }
    }

    #[test]
    fn logout_does_not_depend_on_origin() {
        let mut state = ViewState::default();
        state.navigate(View::Login);
        state.logout();
        assert_eq!(state.current(), View::Home);
    }
}
