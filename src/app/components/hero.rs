//! Hero section.

use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            span { class: "eyebrow", "A regenerative collective" }
            h1 {
                "Grow together."
                br {}
                "Leave it better."
            }
            p { class: "hero-tagline",
                "Eco/Tribe is a network of growers, builders and stewards "
                "restoring the places we live in, one plot at a time."
            }
            a { class: "cta", href: "#join", "Join the tribe" }
        }
    }
}
