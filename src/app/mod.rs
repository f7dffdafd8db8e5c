//! Application root: theme and view coordination.
//!
//! All page-wide state lives here, owned by two context providers. The
//! theme controller persists to localStorage and mirrors itself onto the
//! document root; the view switch selects which subtree renders. Both are
//! read by components through context and mutated only through the
//! controllers' methods.

use dioxus::prelude::*;

pub mod background;
pub mod components;
pub mod intro;
pub mod pages;
pub mod prefs;
pub mod styles;
pub mod theme;
pub mod view;

use background::{GlowField, WaveGrid};
use components::{CustomCursor, Nav};
use intro::{use_intro_gate, IntroSequence};
use pages::{AdminPortal, Home, Login};
use styles::GLOBAL_STYLES;
use theme::{use_theme, use_theme_provider};
use view::{use_view_provider, View};

/// Root component.
#[component]
pub fn App() -> Element {
    // Theme context first: resolves the persisted preference on mount and
    // applies it before anything meaningful renders.
    use_theme_provider();
    let view = use_view_provider();

    // Simulated asset loading before the page reveals itself
    let loaded = use_intro_gate();

    let theme = use_theme().get();
    let current = view.get();

    let content = match current {
        View::Home => rsx! { Home {} },
        View::Login => rsx! {
            Login { on_login: move |_| view.login_succeeded() }
        },
        View::Admin => rsx! {
            AdminPortal { on_logout: move |_| view.logout() }
        },
    };

    rsx! {
        document::Title { "Eco/Tribe" }
        style { {GLOBAL_STYLES} }

        div { class: "page",
            if !loaded() {
                IntroSequence {}
            } else {
                CustomCursor {}

                // Global continuous background: grid mesh behind glow
                div { class: "bg-layers",
                    WaveGrid { theme }
                    GlowField { theme }
                }

                if current != View::Admin {
                    Nav {
                        active: current,
                        on_navigate: move |target| view.navigate(target),
                    }
                }

                main { class: if current == View::Admin { "portal" },
                    {content}
                }
            }
        }
    }
}
