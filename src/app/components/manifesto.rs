//! Manifesto section.

use dioxus::prelude::*;

#[component]
pub fn Manifesto() -> Element {
    rsx! {
        section { id: "manifesto", class: "prose",
            span { class: "eyebrow", "Manifesto" }
            h2 { "The land is not a resource. It is a relationship." }
            p {
                "We believe the soil under our feet is shared infrastructure. "
                "What we take from it we owe back, with interest."
            }
            p {
                "Eco/Tribe exists to make regeneration ordinary: a weekly "
                "habit, a neighborhood ritual, a default instead of a cause."
            }
            p {
                "No purity tests, no gatekeeping. Bring a spade or bring a "
                "spreadsheet. The tribe has work for both."
            }
        }
    }
}
