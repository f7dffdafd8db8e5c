//! Top navigation bar.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, Theme};
use crate::app::view::View;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active view, marked with `aria-current`.
    pub active: View,
    /// Invoked with the view the user asked for.
    pub on_navigate: EventHandler<View>,
}

/// Navigation bar with brand, view links and the theme toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let theme = use_theme();
    let glyph = match theme.get() {
        Theme::Dark => "\u{2600}",  // sun: switch to light
        Theme::Light => "\u{263E}", // moon: switch to dark
    };

    rsx! {
        nav { class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| props.on_navigate.call(View::Home),
                "Eco/Tribe"
            }
            ul { class: "navbar-items",
                li {
                    button {
                        class: "navbar-link",
                        "aria-current": if props.active == View::Home { "page" },
                        onclick: move |_| props.on_navigate.call(View::Home),
                        "Collective"
                    }
                }
                li {
                    button {
                        class: "navbar-link",
                        "aria-current": if props.active == View::Login { "page" },
                        onclick: move |_| props.on_navigate.call(View::Login),
                        "Portal"
                    }
                }
                li {
                    button {
                        class: "theme-toggle",
                        "aria-label": "Toggle theme",
                        onclick: move |_| theme.toggle(),
                        "{glyph}"
                    }
                }
            }
        }
    }
}
